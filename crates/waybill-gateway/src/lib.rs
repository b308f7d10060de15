//! HTTP gateway for the Waybill tracking number issuer.
//!
//! Validates incoming shipment parameters, forwards the country pair to an
//! [`Issuer`][waybill_core::Issuer] and renders the result as JSON.

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use state::AppState;
