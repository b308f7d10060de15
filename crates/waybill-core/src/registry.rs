use crate::error::Result;
use crate::tracking_code::TrackingCode;
use async_trait::async_trait;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// The durable record of one issued tracking code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuanceRecord {
    /// The issued code; primary identity of the record.
    pub code: TrackingCode,
    /// When the code was registered.
    pub created_at: Timestamp,
}

impl IssuanceRecord {
    /// Creates a record stamped with the current time.
    pub fn now(code: TrackingCode) -> Self {
        Self {
            code,
            created_at: Timestamp::now(),
        }
    }
}

/// A read-only view of a registry.
#[async_trait]
pub trait ReadRegistry: Send + Sync + 'static {
    /// Retrieves the issuance record for a given code.
    /// Returns `None` if the code was never issued.
    async fn get(&self, code: &TrackingCode) -> Result<Option<IssuanceRecord>>;

    /// Checks whether a code has already been issued.
    async fn exists(&self, code: &TrackingCode) -> Result<bool>;

    /// Number of codes issued so far.
    async fn count(&self) -> Result<u64>;
}

/// The uniqueness store. Records are append-only.
#[async_trait]
pub trait Registry: ReadRegistry {
    /// Atomically registers `record` unless its code is already taken.
    ///
    /// Returns `Ok(true)` if the record was inserted and `Ok(false)` if the code
    /// already existed, in which case the stored record is left untouched.
    /// `Err` is reserved for failures of the store itself.
    async fn register_if_absent(&self, record: &IssuanceRecord) -> Result<bool>;
}
