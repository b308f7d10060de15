use thiserror::Error;

/// Errors raised while constructing validated domain values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid country code: {0}")]
    InvalidCountryCode(String),
    #[error("invalid tracking code: {0}")]
    InvalidTrackingCode(String),
}

/// Failures of the uniqueness store itself.
///
/// A duplicate code is not a storage failure: registries report it as
/// `Ok(false)` from [`Registry::register_if_absent`][crate::Registry].
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("storage query failed: {0}")]
    Query(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
    #[error("storage operation failed: {0}")]
    Operation(String),
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors surfaced by an [`Issuer`][crate::Issuer].
#[derive(Debug, Clone, Error)]
pub enum IssueError {
    #[error("failed to issue a unique tracking code after {attempts} attempts")]
    GenerationExhausted { attempts: u32 },
    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[from] StorageError),
}
