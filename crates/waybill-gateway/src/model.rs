mod health;
mod tracking;

pub use health::HealthResponse;
pub use tracking::{NextTrackingNumberQuery, Shipment, TrackingNumberResponse};
