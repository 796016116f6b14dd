// tests/support/helpers.rs
use super::mocks;
use account_service::application::commands::accounts::AccountCommandService;
use account_service::application::queries::accounts::AccountQueryService;
use account_service::application::{
    ports::{security::PasswordHasher, time::Clock},
    services::ApplicationServices,
};
use account_service::domain::account::AccountRepository;
use account_service::presentation::http::{routes::build_router, state::HttpState};
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub struct TestHarness {
    pub repo: Arc<mocks::InMemoryAccountRepo>,
    pub hasher: Arc<mocks::StrictPasswordHasher>,
    pub commands: Arc<AccountCommandService>,
    pub queries: Arc<AccountQueryService>,
    pub state: HttpState,
}

pub fn harness() -> TestHarness {
    harness_with_repo(mocks::InMemoryAccountRepo::new())
}

pub fn harness_with_repo(repo: mocks::InMemoryAccountRepo) -> TestHarness {
    let repo = Arc::new(repo);
    let hasher = Arc::new(mocks::StrictPasswordHasher::default());

    let account_repo: Arc<dyn AccountRepository> = repo.clone();
    let password_hasher: Arc<dyn PasswordHasher> = hasher.clone();
    let clock: Arc<dyn Clock> = Arc::new(mocks::FixedClock);

    let services = Arc::new(ApplicationServices::new(account_repo, password_hasher, clock));

    TestHarness {
        repo,
        hasher,
        commands: Arc::clone(&services.account_commands),
        queries: Arc::clone(&services.account_queries),
        state: HttpState { services },
    }
}

pub fn make_test_router() -> axum::Router {
    build_router(harness().state, &[])
}

/// Send a request with an optional JSON body and return status plus parsed body.
pub async fn send_json(
    app: &axum::Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let resp = app
        .clone()
        .oneshot(builder.body(body).expect("request"))
        .await
        .expect("router is infallible");

    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, json)
}

/// Assert an error body with the expected status and reason phrase.
pub fn assert_error_body(status: StatusCode, json: &Value, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(status, expected_status, "unexpected status, body: {json}");
    assert_eq!(json["error"], expected_error, "unexpected error field: {json}");
    let message = json["message"].as_str().unwrap_or("");
    assert!(!message.is_empty(), "expected non-empty message in {json}");
}
