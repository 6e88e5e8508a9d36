//! Integration tests for API endpoints.
//!
//! Each test drives the full router against its own in-memory SQLite
//! database, so no external services are needed.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::DbErr;
use serde_json::{json, Value};
use tower::ServiceExt;

use user_records::api::{create_router, AppState};
use user_records::config::DatabaseConfig;
use user_records::domain::UserRecord;
use user_records::errors::{AppError, AppResult};
use user_records::infra::Database;
use user_records::services::UserService;

// =============================================================================
// Test Helpers
// =============================================================================

async fn test_database() -> Arc<Database> {
    Arc::new(
        Database::connect(&DatabaseConfig::in_memory())
            .await
            .expect("in-memory database"),
    )
}

async fn test_app() -> Router {
    create_router(AppState::from_database(test_database().await))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn post_form(uri: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Service whose storage is always down
struct UnavailableUserService;

#[async_trait]
impl UserService for UnavailableUserService {
    async fn create_user(&self, _id: String, _name: String) -> AppResult<UserRecord> {
        Err(AppError::Database(DbErr::Custom("database is locked".into())))
    }

    async fn get_user(&self, _id: &str) -> AppResult<UserRecord> {
        Err(AppError::Database(DbErr::Custom("database is locked".into())))
    }

    async fn list_users(&self) -> AppResult<Vec<UserRecord>> {
        Err(AppError::Database(DbErr::Custom("database is locked".into())))
    }
}

// =============================================================================
// Create Endpoint
// =============================================================================

#[tokio::test]
async fn test_add_user_success() {
    let app = test_app().await;

    let (status, body) = send(&app, post_json("/add", json!({ "id": "u1", "name": "Alice" }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "User saved!" }));
}

#[tokio::test]
async fn test_add_user_form_encoded() {
    let app = test_app().await;

    let (status, body) = send(&app, post_form("/add", "id=u7&name=Grace+Hopper")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User saved!");

    let (status, body) = send(&app, get("/get/u7")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "name": "Grace Hopper" }));
}

#[tokio::test]
async fn test_add_user_missing_fields() {
    let app = test_app().await;

    let cases = [
        json!({ "name": "Alice" }),
        json!({ "id": "u1" }),
        json!({ "id": "", "name": "Alice" }),
        json!({ "id": "u1", "name": "" }),
        json!({}),
    ];

    for case in cases {
        let (status, body) = send(&app, post_json("/add", case.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "case {}", case);
        assert_eq!(body["code"], "VALIDATION_ERROR", "case {}", case);
        assert!(body["error"].as_str().unwrap().contains("required"), "case {}", case);
    }

    // Nothing was written
    let (_, body) = send(&app, get("/users")).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_add_user_malformed_body() {
    let app = test_app().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/add")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"id\": \"u1\", "))
        .unwrap();

    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_add_user_duplicate_keeps_first_name() {
    let app = test_app().await;

    let (status, _) = send(&app, post_json("/add", json!({ "id": "u1", "name": "Alice" }))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, post_json("/add", json!({ "id": "u1", "name": "Bob" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "User already exists", "code": "DUPLICATE_KEY" }));

    let (_, body) = send(&app, get("/get/u1")).await;
    assert_eq!(body, json!({ "name": "Alice" }));
}

// =============================================================================
// Read Endpoints
// =============================================================================

#[tokio::test]
async fn test_scenario_insert_duplicate_lookup() {
    let app = test_app().await;

    let (status, _) = send(&app, post_json("/add", json!({ "id": "u1", "name": "Alice" }))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, post_json("/add", json!({ "id": "u1", "name": "Bob" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, get("/get/u1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "name": "Alice" }));

    let (status, body) = send(&app, get("/get/u2")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "User not found", "code": "NOT_FOUND" }));
}

#[tokio::test]
async fn test_lookup_is_idempotent() {
    let app = test_app().await;
    send(&app, post_json("/add", json!({ "id": "u1", "name": "Alice" }))).await;

    let first = send(&app, get("/get/u1")).await;
    let second = send(&app, get("/get/u1")).await;
    assert_eq!(first, second);

    let first = send(&app, get("/get/nobody")).await;
    let second = send(&app, get("/get/nobody")).await;
    assert_eq!(first, second);
    assert_eq!(first.0, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_lookup_percent_encoded_id() {
    let app = test_app().await;
    send(&app, post_json("/add", json!({ "id": "jane doe", "name": "Jane" }))).await;

    let (status, body) = send(&app, get("/get/jane%20doe")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Jane");
}

#[tokio::test]
async fn test_legacy_user_routes_return_full_record() {
    let app = test_app().await;
    send(&app, post_json("/add", json!({ "id": "u1", "name": "Alice" }))).await;

    let (status, body) = send(&app, get("/user/u1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": "u1", "name": "Alice" }));

    let (status, body) = send(&app, get("/user?id=u1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": "u1", "name": "Alice" }));

    let (status, _) = send(&app, get("/user/u2")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_legacy_query_requires_id() {
    let app = test_app().await;

    for uri in ["/user", "/user?id="] {
        let (status, body) = send(&app, get(uri)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "uri {}", uri);
        assert_eq!(body["error"], "Missing user id parameter");
    }
}

#[tokio::test]
async fn test_list_users_ordered_by_id() {
    let app = test_app().await;
    for (id, name) in [("u3", "Carol"), ("u1", "Alice"), ("u2", "Bob")] {
        send(&app, post_json("/add", json!({ "id": id, "name": name }))).await;
    }

    let (status, body) = send(&app, get("/users")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "id": "u1", "name": "Alice" },
            { "id": "u2", "name": "Bob" },
            { "id": "u3", "name": "Carol" },
        ])
    );
}

// =============================================================================
// Storage Failures
// =============================================================================

#[tokio::test]
async fn test_storage_failure_maps_to_500() {
    let state = AppState::new(Arc::new(UnavailableUserService), test_database().await);
    let app = create_router(state);

    let expected = json!({ "error": "Database error", "code": "DATABASE_ERROR" });

    let (status, body) = send(&app, post_json("/add", json!({ "id": "u1", "name": "Alice" }))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, expected);

    let (status, body) = send(&app, get("/get/u1")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, expected);
}

#[tokio::test]
async fn test_validation_runs_before_storage() {
    // The failing service is never reached for an invalid body
    let state = AppState::new(Arc::new(UnavailableUserService), test_database().await);
    let app = create_router(state);

    let (status, body) = send(&app, post_json("/add", json!({ "id": "u1" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

// =============================================================================
// Health & Docs
// =============================================================================

#[tokio::test]
async fn test_health_reports_database() {
    let app = test_app().await;

    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["services"]["database"]["status"], "healthy");
}

#[tokio::test]
async fn test_openapi_document_lists_routes() {
    let app = test_app().await;

    let (status, body) = send(&app, get("/api-docs/openapi.json")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/add"].is_object());
    assert!(body["paths"]["/get/{id}"].is_object());
}
