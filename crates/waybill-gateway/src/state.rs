use std::sync::Arc;

use waybill_core::Issuer;

#[derive(Clone)]
pub struct AppState {
    issuer: Arc<dyn Issuer>,
}

impl AppState {
    pub fn new(issuer: Arc<dyn Issuer>) -> Self {
        Self { issuer }
    }

    pub fn issuer(&self) -> &dyn Issuer {
        self.issuer.as_ref()
    }
}
