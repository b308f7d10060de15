use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;
use waybill_core::{CountryCode, IssueError, Issuer, StorageError, TrackingCode};
use waybill_gateway::{App, AppState};
use waybill_generator::RandomGenerator;
use waybill_issuer::IssuerService;
use waybill_storage::{InMemoryRegistry, ReadRegistry};

const VALID_QUERY: &str = "origin_country_id=MY&destination_country_id=ID&weight=1.234\
    &created_at=2018-11-20T19:29:32%2B08:00&customer_id=de619854-b59b-425e-9db4-943979e1bd49\
    &customer_name=RedBox%20Logistics&customer_slug=redbox-logistics";

struct FailingIssuer(IssueError);

#[async_trait]
impl Issuer for FailingIssuer {
    async fn issue(
        &self,
        _origin: &CountryCode,
        _destination: &CountryCode,
    ) -> Result<TrackingCode, IssueError> {
        Err(self.0.clone())
    }
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn health_reports_ok() {
    let app = App::router(AppState::new(Arc::new(FailingIssuer(
        IssueError::GenerationExhausted { attempts: 10 },
    ))));

    let (status, body) = get_json(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn valid_request_issues_and_registers_code() {
    let registry = Arc::new(InMemoryRegistry::new());
    let issuer = IssuerService::with_shared_registry(
        Arc::clone(&registry),
        RandomGenerator::new(),
        Default::default(),
    )
    .unwrap();
    let app = App::router(AppState::new(Arc::new(issuer)));

    let (status, body) = get_json(app, &format!("/next-tracking-number?{VALID_QUERY}")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.get("tracking_number").is_none());
    let number = body["trackingNumber"].as_str().unwrap();
    assert_eq!(number.len(), 16);
    assert!(number.starts_with("MY"));
    assert!(number.ends_with("ID"));
    assert!(number
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    assert!(body["createdAt"].is_string());

    let code = TrackingCode::parse(number).unwrap();
    assert!(registry.exists(&code).await.unwrap());
}

#[tokio::test]
async fn invalid_parameters_are_listed() {
    let app = App::router(AppState::new(Arc::new(IssuerService::new(
        InMemoryRegistry::new(),
        RandomGenerator::new(),
    ))));

    let (status, body) = get_json(
        app,
        "/next-tracking-number?origin_country_id=MYS&destination_country_id=ID&weight=5000",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
    assert_eq!(body["error"], "Bad Request");
    assert_eq!(body["message"], "Validation failed");
    assert!(body["timestamp"].is_i64());

    let errors: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e.as_str().unwrap())
        .collect();
    assert!(errors.iter().any(|e| e.starts_with("origin_country_id:")));
    assert!(errors.iter().any(|e| e.starts_with("weight:")));
    assert!(errors.iter().any(|e| e.starts_with("created_at:")));
    assert!(errors.iter().any(|e| e.starts_with("customer_id:")));
    assert!(!errors.iter().any(|e| e.starts_with("destination_country_id:")));
}

#[tokio::test]
async fn space_separated_created_at_is_rejected() {
    let app = App::router(AppState::new(Arc::new(IssuerService::new(
        InMemoryRegistry::new(),
        RandomGenerator::new(),
    ))));
    let query = VALID_QUERY.replace("2018-11-20T19:29:32", "2018-11-20%2019:29:32");

    let (status, body) = get_json(app, &format!("/next-tracking-number?{query}")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["errors"][0]
        .as_str()
        .unwrap()
        .starts_with("created_at:"));
}

#[tokio::test]
async fn exhausted_issuer_maps_to_generic_server_error() {
    let app = App::router(AppState::new(Arc::new(FailingIssuer(
        IssueError::GenerationExhausted { attempts: 10 },
    ))));

    let (status, body) = get_json(app, &format!("/next-tracking-number?{VALID_QUERY}")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body["message"],
        "An unexpected error occurred. Please try again later."
    );
    assert!(body.get("errors").is_none());
    assert!(!body.to_string().contains("attempts"));
}

#[tokio::test]
async fn storage_failure_maps_to_generic_server_error() {
    let app = App::router(AppState::new(Arc::new(FailingIssuer(
        IssueError::StorageUnavailable(StorageError::Unavailable("connection refused".into())),
    ))));

    let (status, body) = get_json(app, &format!("/next-tracking-number?{VALID_QUERY}")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], 500);
    assert!(body["timestamp"].as_i64().unwrap() > 0);
    assert!(!body.to_string().contains("connection refused"));
}
