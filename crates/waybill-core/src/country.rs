use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

const LENGTH: usize = 2;

/// A two character country identifier, e.g. `US` or `CA`.
///
/// Codes contain only uppercase ASCII letters and digits.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode(String);

impl CountryCode {
    /// Creates a new `CountryCode` after validating the input.
    pub fn new(code: impl Into<String>) -> Result<Self, CoreError> {
        let code = code.into();
        Self::validate(&code)?;
        Ok(Self(code))
    }

    /// Creates a `CountryCode` without validation.
    ///
    /// Use this only for values that were already validated elsewhere.
    pub fn new_unchecked(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(code: &str) -> Result<(), CoreError> {
        if code.len() != LENGTH {
            return Err(CoreError::InvalidCountryCode(format!(
                "length must be exactly {}, got {}",
                LENGTH,
                code.len()
            )));
        }

        if !code
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        {
            return Err(CoreError::InvalidCountryCode(format!(
                "must contain only uppercase letters or digits: '{}'",
                code
            )));
        }

        Ok(())
    }
}

impl Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CountryCode {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CountryCode> for String {
    fn from(value: CountryCode) -> Self {
        value.0
    }
}
