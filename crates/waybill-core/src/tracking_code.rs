use crate::country::CountryCode;
use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Total length of a tracking code.
pub const LENGTH: usize = 16;
/// Length of the random segment between the two country codes.
pub const BODY_LENGTH: usize = 12;

const ORIGIN_END: usize = 2;
const BODY_END: usize = ORIGIN_END + BODY_LENGTH;

/// A 16 character shipment tracking code.
///
/// Layout: `origin (2) || body (12) || destination (2)`, every character in
/// `[A-Z0-9]`. For example `US4F2B9C1D8E3ACA` is a shipment from `US` to `CA`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TrackingCode(String);

impl TrackingCode {
    /// Assembles a tracking code from its three segments.
    ///
    /// The caller is trusted: `body` is expected to be [`BODY_LENGTH`]
    /// characters from `[A-Z0-9]`, as produced by a generator.
    pub fn compose(origin: &CountryCode, body: &str, destination: &CountryCode) -> Self {
        let mut code = String::with_capacity(LENGTH);
        code.push_str(origin.as_str());
        code.push_str(body);
        code.push_str(destination.as_str());
        Self(code)
    }

    /// Parses and validates a tracking code, e.g. one read back from storage.
    pub fn parse(code: impl Into<String>) -> Result<Self, CoreError> {
        let code = code.into();
        Self::validate(&code)?;
        Ok(Self(code))
    }

    /// Returns the tracking code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn origin(&self) -> &str {
        self.0.get(..ORIGIN_END).unwrap_or_default()
    }

    pub fn body(&self) -> &str {
        self.0.get(ORIGIN_END..BODY_END).unwrap_or_default()
    }

    pub fn destination(&self) -> &str {
        self.0.get(BODY_END..).unwrap_or_default()
    }

    fn validate(code: &str) -> Result<(), CoreError> {
        if code.len() != LENGTH {
            return Err(CoreError::InvalidTrackingCode(format!(
                "length must be exactly {}, got {}",
                LENGTH,
                code.len()
            )));
        }

        if !code
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        {
            return Err(CoreError::InvalidTrackingCode(format!(
                "must contain only uppercase letters or digits: '{}'",
                code
            )));
        }

        Ok(())
    }
}

impl Display for TrackingCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for TrackingCode {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<TrackingCode> for String {
    fn from(value: TrackingCode) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compose_places_segments() {
        let code = TrackingCode::compose(
            &CountryCode::new_unchecked("US"),
            "4F2B9C1D8E3A",
            &CountryCode::new_unchecked("CA"),
        );

        assert_eq!(code.as_str(), "US4F2B9C1D8E3ACA");
        assert_eq!(code.origin(), "US");
        assert_eq!(code.body(), "4F2B9C1D8E3A");
        assert_eq!(code.destination(), "CA");
    }

    #[test]
    fn parse_valid() {
        let code = TrackingCode::parse("GB000000000001FR").unwrap();
        assert_eq!(code.to_string(), "GB000000000001FR");
    }

    #[test]
    fn parse_wrong_length() {
        assert!(TrackingCode::parse("").is_err());
        assert!(TrackingCode::parse("US4F2B9C1D8E3AC").is_err());
        assert!(TrackingCode::parse("US4F2B9C1D8E3ACAX").is_err());
    }

    #[test]
    fn parse_invalid_characters() {
        assert!(TrackingCode::parse("us4f2b9c1d8e3aca").is_err());
        assert!(TrackingCode::parse("US4F2B9C-D8E3ACA").is_err());
    }

    #[test]
    fn serde_as_plain_string() {
        let code = TrackingCode::parse("US4F2B9C1D8E3ACA").unwrap();
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"US4F2B9C1D8E3ACA\"");

        let back: TrackingCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, code);
        assert!(serde_json::from_str::<TrackingCode>("\"short\"").is_err());
    }
}
