//! Tracking code issuer.
//!
//! This crate provides [`IssuerService`], which turns generator candidates into
//! durably registered, unique tracking codes. Core types are re-exported from
//! `waybill_core`.

pub mod error;
pub mod policy;
pub mod service;

pub use error::IssuerError;
pub use policy::RetryPolicy;
pub use service::IssuerService;
pub use waybill_core::{IssueError, Issuer};
