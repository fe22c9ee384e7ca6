//! Integration tests for API endpoints.
//!
//! These tests drive the real router with a stub user service and a
//! mock database backend, so no PostgreSQL instance is required.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
use serde_json::{json, Value};
use tower::ServiceExt;

use dagym_api::api::{create_router, AppState};
use dagym_api::domain::User;
use dagym_api::errors::{AppError, AppResult};
use dagym_api::infra::Database;
use dagym_api::services::UserService;

/// Stub user service with a single known record (id=1, a@x.com, p1)
struct StubUserService;

fn known_user() -> User {
    User {
        id: Some(1),
        name: "Maria Silva".to_string(),
        username: "maria.silva".to_string(),
        email: "a@x.com".to_string(),
        password: "p1".to_string(),
    }
}

#[async_trait]
impl UserService for StubUserService {
    async fn register(&self, mut user: User) -> AppResult<User> {
        user.id = Some(1);
        Ok(user)
    }

    async fn login(&self, email: &str, password: &str) -> AppResult<bool> {
        Ok(email == "a@x.com" && password == "p1")
    }

    async fn get_user(&self, id: i64) -> AppResult<Option<User>> {
        if id == 1 {
            Ok(Some(known_user()))
        } else {
            Ok(None)
        }
    }

    async fn update_user(&self, id: i64, updated: User) -> AppResult<User> {
        if id != 1 {
            return Err(AppError::UserNotFound);
        }
        let mut user = known_user();
        user.email = updated.email;
        user.password = updated.password;
        Ok(user)
    }

    async fn delete_user(&self, _id: i64) -> AppResult<()> {
        Ok(())
    }
}

/// Build a router over the stub service and a mock database
fn test_app() -> Router {
    let connection = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let state = AppState::new(
        Arc::new(StubUserService),
        Arc::new(Database::from_connection(connection)),
    );
    create_router(state)
}

/// Build a router whose mock database answers one ping
fn test_app_with_healthy_db() -> Router {
    let connection = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();
    let state = AppState::new(
        Arc::new(StubUserService),
        Arc::new(Database::from_connection(connection)),
    );
    create_router(state)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// Root & Health
// =============================================================================

#[tokio::test]
async fn root_returns_service_banner() {
    let response = test_app().oneshot(get_request("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"Dagym API");
}

#[tokio::test]
async fn health_reports_database_status() {
    let response = test_app_with_healthy_db()
        .oneshot(get_request("/health"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"]["status"], "healthy");
}

// =============================================================================
// Registration
// =============================================================================

#[tokio::test]
async fn register_returns_created_user_without_password() {
    let payload = json!({
        "name": "Maria Silva",
        "username": "maria.silva",
        "email": "maria@example.com",
        "password": "secret"
    });

    let response = test_app()
        .oneshot(json_request("POST", "/auth/register", payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response_json(response).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["email"], "maria@example.com");
    assert_eq!(body["username"], "maria.silva");
    // The stored password never appears in responses
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn register_rejects_malformed_email() {
    let payload = json!({
        "name": "Maria Silva",
        "username": "maria.silva",
        "email": "not-an-email",
        "password": "secret"
    });

    let response = test_app()
        .oneshot(json_request("POST", "/auth/register", payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

// =============================================================================
// Login
// =============================================================================

#[tokio::test]
async fn login_reports_authenticated_for_matching_credentials() {
    let payload = json!({ "email": "a@x.com", "password": "p1" });

    let response = test_app()
        .oneshot(json_request("POST", "/auth/login", payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["authenticated"], true);
}

#[tokio::test]
async fn login_reports_unauthenticated_for_wrong_password() {
    let payload = json!({ "email": "a@x.com", "password": "wrong" });

    let response = test_app()
        .oneshot(json_request("POST", "/auth/login", payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["authenticated"], false);
}

// =============================================================================
// User records
// =============================================================================

#[tokio::test]
async fn get_user_returns_record() {
    let response = test_app().oneshot(get_request("/users/1")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["email"], "a@x.com");
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn get_user_returns_404_when_absent() {
    let response = test_app().oneshot(get_request("/users/999")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], "USER_NOT_FOUND");
    assert_eq!(body["error"]["message"], "user not found");
}

#[tokio::test]
async fn update_user_returns_updated_record() {
    let payload = json!({ "email": "new@x.com", "password": "new" });

    let response = test_app()
        .oneshot(json_request("PUT", "/users/1", payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["email"], "new@x.com");
}

#[tokio::test]
async fn update_user_returns_404_when_absent() {
    let payload = json!({ "email": "new@x.com", "password": "new" });

    let response = test_app()
        .oneshot(json_request("PUT", "/users/999", payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_user_returns_no_content() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/users/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn delete_user_is_silent_for_unknown_identifier() {
    // Deleting an absent record is indistinguishable from deleting
    // an existing one
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/users/999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
