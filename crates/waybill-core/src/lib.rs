//! Core types and traits for the Waybill tracking number issuer.
//!
//! This crate provides the domain types shared by the generator, the
//! storage backends, the issuer service and the HTTP gateway.

pub mod country;
pub mod error;
pub mod issuer;
pub mod registry;
pub mod tracking_code;

pub use country::CountryCode;
pub use error::{CoreError, IssueError, StorageError};
pub use issuer::Issuer;
pub use registry::{IssuanceRecord, ReadRegistry, Registry};
pub use tracking_code::TrackingCode;
