use crate::error::IssuerError;
use typed_builder::TypedBuilder;

/// Default number of generate-and-register attempts per issuance.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Bounds the collision retry loop of an issuer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TypedBuilder)]
pub struct RetryPolicy {
    /// Attempts before giving up with `GenerationExhausted`. Must be at least 1.
    #[builder(default = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: u32,
}

impl RetryPolicy {
    pub fn validate(&self) -> Result<(), IssuerError> {
        if self.max_attempts == 0 {
            return Err(IssuerError::InvalidPolicy(
                "max_attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::builder().build()
    }
}
