use crate::memory::InMemoryRegistry;
use crate::mysql::MySqlRegistry;
use async_trait::async_trait;
use waybill_core::error::Result;
use waybill_core::{IssuanceRecord, ReadRegistry, Registry, TrackingCode};

/// A registry selected at runtime.
///
/// Both variants honour the same insert-or-reject contract; the in-memory one
/// simply scopes uniqueness to the current process.
#[derive(Debug, Clone)]
pub enum RegistryBackend {
    InMemory(InMemoryRegistry),
    MySql(MySqlRegistry),
}

impl RegistryBackend {
    pub fn kind(&self) -> &'static str {
        match self {
            RegistryBackend::InMemory(_) => "in-memory",
            RegistryBackend::MySql(_) => "mysql",
        }
    }
}

impl From<InMemoryRegistry> for RegistryBackend {
    fn from(value: InMemoryRegistry) -> Self {
        Self::InMemory(value)
    }
}

impl From<MySqlRegistry> for RegistryBackend {
    fn from(value: MySqlRegistry) -> Self {
        Self::MySql(value)
    }
}

#[async_trait]
impl ReadRegistry for RegistryBackend {
    async fn get(&self, code: &TrackingCode) -> Result<Option<IssuanceRecord>> {
        match self {
            RegistryBackend::InMemory(registry) => registry.get(code).await,
            RegistryBackend::MySql(registry) => registry.get(code).await,
        }
    }

    async fn exists(&self, code: &TrackingCode) -> Result<bool> {
        match self {
            RegistryBackend::InMemory(registry) => registry.exists(code).await,
            RegistryBackend::MySql(registry) => registry.exists(code).await,
        }
    }

    async fn count(&self) -> Result<u64> {
        match self {
            RegistryBackend::InMemory(registry) => registry.count().await,
            RegistryBackend::MySql(registry) => registry.count().await,
        }
    }
}

#[async_trait]
impl Registry for RegistryBackend {
    async fn register_if_absent(&self, record: &IssuanceRecord) -> Result<bool> {
        match self {
            RegistryBackend::InMemory(registry) => registry.register_if_absent(record).await,
            RegistryBackend::MySql(registry) => registry.register_if_absent(record).await,
        }
    }
}
