use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use jiff::Timestamp;
use std::sync::Arc;
use waybill_core::error::Result;
use waybill_core::{IssuanceRecord, ReadRegistry, Registry, TrackingCode};

/// In-memory implementation of the registry using DashMap.
///
/// DashMap provides better concurrency than RwLock<HashMap> because it
/// uses sharded locks, allowing concurrent reads and writes to different
/// buckets without blocking. Registration goes through the entry API, so the
/// vacancy check and the insert happen under the same shard lock.
///
/// Clones are handles onto the same map, so every clone observes and guards
/// the same set of codes. Contents live only as long as the process; codes
/// issued before a restart are forgotten.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistry {
    storage: Arc<DashMap<TrackingCode, Timestamp>>,
}

impl InMemoryRegistry {
    /// Creates a new in-memory registry.
    pub fn new() -> Self {
        Self {
            storage: Arc::new(DashMap::new()),
        }
    }

    /// Creates a new in-memory registry with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Arc::new(DashMap::with_capacity(capacity)),
        }
    }

    /// Returns a snapshot of every issued code.
    pub fn codes(&self) -> Vec<TrackingCode> {
        self.storage.iter().map(|entry| entry.key().clone()).collect()
    }
}

#[async_trait]
impl ReadRegistry for InMemoryRegistry {
    async fn get(&self, code: &TrackingCode) -> Result<Option<IssuanceRecord>> {
        Ok(self.storage.get(code).map(|entry| IssuanceRecord {
            code: entry.key().clone(),
            created_at: *entry.value(),
        }))
    }

    async fn exists(&self, code: &TrackingCode) -> Result<bool> {
        Ok(self.storage.contains_key(code))
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.storage.len() as u64)
    }
}

#[async_trait]
impl Registry for InMemoryRegistry {
    async fn register_if_absent(&self, record: &IssuanceRecord) -> Result<bool> {
        match self.storage.entry(record.code.clone()) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(vacant) => {
                vacant.insert(record.created_at);
                Ok(true)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::SignedDuration;

    fn code(s: &str) -> TrackingCode {
        TrackingCode::parse(s).unwrap()
    }

    fn record(s: &str, created_at: Timestamp) -> IssuanceRecord {
        IssuanceRecord {
            code: code(s),
            created_at,
        }
    }

    #[tokio::test]
    async fn register_and_get() {
        let registry = InMemoryRegistry::new();
        let now = Timestamp::now();

        assert!(registry
            .register_if_absent(&record("US4F2B9C1D8E3ACA", now))
            .await
            .unwrap());

        let got = registry.get(&code("US4F2B9C1D8E3ACA")).await.unwrap().unwrap();
        assert_eq!(got.code.as_str(), "US4F2B9C1D8E3ACA");
        assert_eq!(got.created_at, now);
    }

    #[tokio::test]
    async fn get_nonexistent() {
        let registry = InMemoryRegistry::new();

        let result = registry.get(&code("US000000000000CA")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn duplicate_is_rejected_and_original_kept() {
        let registry = InMemoryRegistry::new();
        let first = Timestamp::now();
        let later = first + SignedDuration::from_secs(60);

        assert!(registry
            .register_if_absent(&record("US4F2B9C1D8E3ACA", first))
            .await
            .unwrap());
        assert!(!registry
            .register_if_absent(&record("US4F2B9C1D8E3ACA", later))
            .await
            .unwrap());

        let got = registry.get(&code("US4F2B9C1D8E3ACA")).await.unwrap().unwrap();
        assert_eq!(got.created_at, first);
        assert_eq!(registry.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn exists_and_count() {
        let registry = InMemoryRegistry::with_capacity(4);

        assert!(!registry.exists(&code("DE000000000001AT")).await.unwrap());
        assert_eq!(registry.count().await.unwrap(), 0);

        registry
            .register_if_absent(&IssuanceRecord::now(code("DE000000000001AT")))
            .await
            .unwrap();
        registry
            .register_if_absent(&IssuanceRecord::now(code("DE000000000002AT")))
            .await
            .unwrap();

        assert!(registry.exists(&code("DE000000000001AT")).await.unwrap());
        assert_eq!(registry.count().await.unwrap(), 2);
        assert_eq!(registry.codes().len(), 2);
    }

    #[tokio::test]
    async fn clones_share_one_store() {
        let registry = InMemoryRegistry::new();
        let handle = registry.clone();

        assert!(handle
            .register_if_absent(&IssuanceRecord::now(code("FR000000000007BE")))
            .await
            .unwrap());

        assert!(registry.exists(&code("FR000000000007BE")).await.unwrap());
        assert!(!registry
            .register_if_absent(&IssuanceRecord::now(code("FR000000000007BE")))
            .await
            .unwrap());
        assert_eq!(handle.count().await.unwrap(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_registration_of_same_code_has_one_winner() {
        let registry = Arc::new(InMemoryRegistry::new());
        let mut handles = vec![];

        for _ in 0..32 {
            let registry = Arc::clone(&registry);
            handles.push(tokio::spawn(async move {
                registry
                    .register_if_absent(&IssuanceRecord::now(code("JP00000000ABCDKR")))
                    .await
                    .unwrap()
            }));
        }

        let mut winners = 0;
        for handle in handles {
            if handle.await.unwrap() {
                winners += 1;
            }
        }

        assert_eq!(winners, 1);
        assert_eq!(registry.count().await.unwrap(), 1);
    }
}
