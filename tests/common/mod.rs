// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use cashbook::LedgerService;
use cashbook::api::{self, CPF_HEADER};
use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;
use tower::ServiceExt;

/// Helper to create a fresh, empty service
pub fn test_service() -> Arc<LedgerService> {
    Arc::new(LedgerService::new())
}

/// Helper to build a router over a fresh service, returning both
pub fn test_app() -> (Router, Arc<LedgerService>) {
    let service = test_service();
    (api::router(service.clone()), service)
}

/// Helper to parse a date string into NaiveDate
pub fn parse_day(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

/// Helper to build a timestamp at noon UTC on the given day
pub fn noon(date_str: &str) -> DateTime<Utc> {
    parse_day(date_str).and_hms_opt(12, 0, 0).unwrap().and_utc()
}

/// Response captured from a single request
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Option<Value>,
    /// Body exactly as it went over the wire
    pub raw: String,
}

impl TestResponse {
    pub fn error(&self) -> Option<&str> {
        self.body.as_ref()?.get("error")?.as_str()
    }

    pub fn message(&self) -> Option<&str> {
        self.body.as_ref()?.get("message")?.as_str()
    }
}

/// Send one request through the router without binding a socket
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    cpf: Option<&str>,
    body: Option<Value>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cpf) = cpf {
        builder = builder.header(CPF_HEADER, cpf);
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let raw = String::from_utf8_lossy(&bytes).into_owned();
    let body = if bytes.is_empty() {
        None
    } else {
        // Plain-text responses are kept as a JSON string
        Some(serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(raw.clone())))
    };

    TestResponse { status, body, raw }
}

/// Register a customer through the API and assert it succeeded
pub async fn register(app: &Router, cpf: &str, name: &str) {
    let response = send(
        app,
        Method::POST,
        "/account",
        None,
        Some(serde_json::json!({ "cpf": cpf, "name": name })),
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED);
}
