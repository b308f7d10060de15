use crate::error::{AppError, Result};
use crate::model::{NextTrackingNumberQuery, TrackingNumberResponse};
use crate::state::AppState;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use jiff::Timestamp;
use tracing::info;

pub async fn next_tracking_number_handler(
    State(state): State<AppState>,
    query: std::result::Result<Query<NextTrackingNumberQuery>, QueryRejection>,
) -> Result<Json<TrackingNumberResponse>> {
    let Query(query) = query.map_err(|rejection| AppError::Validation(vec![rejection.body_text()]))?;
    let shipment = query.validate().map_err(AppError::Validation)?;

    info!(
        origin = %shipment.origin,
        destination = %shipment.destination,
        weight = shipment.weight,
        shipped_at = %shipment.created_at,
        customer_id = %shipment.customer_id,
        customer_slug = %shipment.customer_slug,
        "received tracking number request"
    );

    let code = state
        .issuer()
        .issue(&shipment.origin, &shipment.destination)
        .await?;

    Ok(Json(TrackingNumberResponse {
        tracking_number: code.to_string(),
        created_at: Timestamp::now(),
    }))
}
