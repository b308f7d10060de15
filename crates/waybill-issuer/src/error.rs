use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IssuerError {
    #[error("invalid retry policy: {0}")]
    InvalidPolicy(String),
}
