pub mod backend;
pub mod memory;
pub mod mysql;

pub use backend::RegistryBackend;
pub use memory::InMemoryRegistry;
pub use mysql::MySqlRegistry;
pub use waybill_core::{IssuanceRecord, ReadRegistry, Registry, StorageError};
