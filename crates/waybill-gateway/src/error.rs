use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use jiff::Timestamp;
use serde::Serialize;
use tracing::{error, warn};
use waybill_core::IssueError;

pub type Result<T> = std::result::Result<T, AppError>;

const GENERIC_FAILURE: &str = "An unexpected error occurred. Please try again later.";

#[derive(Debug)]
pub enum AppError {
    /// One message per rejected request parameter, formatted as `name: reason`.
    Validation(Vec<String>),
    Issue(IssueError),
}

impl From<IssueError> for AppError {
    fn from(value: IssueError) -> Self {
        Self::Issue(value)
    }
}

#[derive(Serialize)]
struct ErrorBody {
    /// Unix epoch milliseconds.
    timestamp: i64,
    status: u16,
    error: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match self {
            AppError::Validation(errors) => {
                warn!(?errors, "rejecting invalid request");
                (
                    StatusCode::BAD_REQUEST,
                    "Validation failed".to_string(),
                    errors,
                )
            }
            // Retry counts and storage details stay in the logs.
            AppError::Issue(err) => {
                error!(error = %err, "tracking code issuance failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    GENERIC_FAILURE.to_string(),
                    Vec::new(),
                )
            }
        };

        let body = ErrorBody {
            timestamp: Timestamp::now().as_millisecond(),
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or_default(),
            message,
            errors,
        };

        (status, Json(body)).into_response()
    }
}
