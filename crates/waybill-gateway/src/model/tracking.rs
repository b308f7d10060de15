use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use waybill_core::CountryCode;

const MIN_WEIGHT: f64 = 0.001;
const MAX_WEIGHT: f64 = 999.999;
const HYPHENATED_UUID_LENGTH: usize = 36;
/// Length of the `YYYY-MM-DD` prefix of a timestamp.
const DATE_LENGTH: usize = 10;

/// Raw query parameters of `GET /next-tracking-number`.
///
/// Every field is optional here so that missing parameters are reported
/// together with the malformed ones.
#[derive(Debug, Default, Deserialize)]
pub struct NextTrackingNumberQuery {
    pub origin_country_id: Option<String>,
    pub destination_country_id: Option<String>,
    pub weight: Option<String>,
    pub created_at: Option<String>,
    pub customer_id: Option<String>,
    pub customer_name: Option<String>,
    pub customer_slug: Option<String>,
}

/// A validated shipment request.
#[derive(Debug, Clone)]
pub struct Shipment {
    pub origin: CountryCode,
    pub destination: CountryCode,
    pub weight: f64,
    pub created_at: Timestamp,
    pub customer_id: Uuid,
    pub customer_name: String,
    pub customer_slug: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingNumberResponse {
    pub tracking_number: String,
    pub created_at: Timestamp,
}

impl NextTrackingNumberQuery {
    /// Validates every parameter, returning all failures as `name: reason`.
    pub fn validate(self) -> Result<Shipment, Vec<String>> {
        let mut errors = Vec::new();

        let origin = country(&mut errors, "origin_country_id", self.origin_country_id);
        let destination = country(
            &mut errors,
            "destination_country_id",
            self.destination_country_id,
        );
        let weight = weight(&mut errors, self.weight);
        let created_at = created_at(&mut errors, self.created_at);
        let customer_id = customer_id(&mut errors, self.customer_id);
        let customer_name = required(&mut errors, "customer_name", self.customer_name);
        let customer_slug = customer_slug(&mut errors, self.customer_slug);

        match (
            origin,
            destination,
            weight,
            created_at,
            customer_id,
            customer_name,
            customer_slug,
        ) {
            (
                Some(origin),
                Some(destination),
                Some(weight),
                Some(created_at),
                Some(customer_id),
                Some(customer_name),
                Some(customer_slug),
            ) if errors.is_empty() => Ok(Shipment {
                origin,
                destination,
                weight,
                created_at,
                customer_id,
                customer_name,
                customer_slug,
            }),
            _ => Err(errors),
        }
    }
}

fn required(errors: &mut Vec<String>, name: &str, value: Option<String>) -> Option<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Some(value),
        _ => {
            errors.push(format!("{name}: must be provided and not blank"));
            None
        }
    }
}

fn country(errors: &mut Vec<String>, name: &str, value: Option<String>) -> Option<CountryCode> {
    let value = required(errors, name, value)?;
    match CountryCode::new(value) {
        Ok(code) => Some(code),
        Err(_) => {
            errors.push(format!(
                "{name}: must be exactly 2 uppercase letters or digits"
            ));
            None
        }
    }
}

fn weight(errors: &mut Vec<String>, value: Option<String>) -> Option<f64> {
    let value = required(errors, "weight", value)?;
    match value.trim().parse::<f64>() {
        Ok(weight) if (MIN_WEIGHT..=MAX_WEIGHT).contains(&weight) => Some(weight),
        Ok(_) => {
            errors.push(format!(
                "weight: must be between {MIN_WEIGHT} and {MAX_WEIGHT}"
            ));
            None
        }
        Err(_) => {
            errors.push(format!("weight: '{value}' is not a decimal number"));
            None
        }
    }
}

fn created_at(errors: &mut Vec<String>, value: Option<String>) -> Option<Timestamp> {
    let value = required(errors, "created_at", value)?;
    match value.parse::<Timestamp>() {
        Ok(timestamp) if has_time_designator(&value) => Some(timestamp),
        _ => {
            errors.push(format!(
                "created_at: '{value}' is not an RFC 3339 timestamp with offset"
            ));
            None
        }
    }
}

fn customer_id(errors: &mut Vec<String>, value: Option<String>) -> Option<Uuid> {
    let value = required(errors, "customer_id", value)?;
    match Uuid::try_parse(&value) {
        Ok(id) if value.len() == HYPHENATED_UUID_LENGTH => Some(id),
        _ => {
            errors.push(
                "customer_id: must be a UUID in the form xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx"
                    .to_string(),
            );
            None
        }
    }
}

fn customer_slug(errors: &mut Vec<String>, value: Option<String>) -> Option<String> {
    let value = required(errors, "customer_slug", value)?;
    if is_slug(&value) {
        Some(value)
    } else {
        errors.push(
            "customer_slug: must be lowercase letters or digits separated by single hyphens"
                .to_string(),
        );
        None
    }
}

/// RFC 3339 separates date and time with `T`; a space is not accepted.
fn has_time_designator(value: &str) -> bool {
    matches!(value.as_bytes().get(DATE_LENGTH), Some(b'T' | b't'))
}

/// Matches `^[a-z0-9]+(-[a-z0-9]+)*$`.
fn is_slug(value: &str) -> bool {
    value.split('-').all(|segment| {
        !segment.is_empty()
            && segment
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
    })
}
