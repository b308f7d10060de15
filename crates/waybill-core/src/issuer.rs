use crate::country::CountryCode;
use crate::error::IssueError;
use crate::tracking_code::TrackingCode;
use async_trait::async_trait;

#[async_trait]
pub trait Issuer: Send + Sync + 'static {
    /// Issues a tracking code for a shipment from `origin` to `destination`.
    ///
    /// The returned code has been durably registered and is unique among all
    /// codes issued by the same store.
    async fn issue(
        &self,
        origin: &CountryCode,
        destination: &CountryCode,
    ) -> Result<TrackingCode, IssueError>;
}
