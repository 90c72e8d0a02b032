//! Shared helpers for HTTP-level integration tests.
//!
//! Mirrors the production router construction so tests exercise the same
//! middleware stack (CORS, request ID, timeout, tracing, panic recovery),
//! with an in-memory guest cache and the advisor pointed at a mock server.

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use jsonwebtoken::{encode, EncodingKey, Header};
use sqlx::PgPool;
use tower::ServiceExt;

use clarity_advisor::{AdvisorService, GeminiConfig};
use clarity_api::auth::jwt::{Claims, JwtConfig};
use clarity_api::config::ServerConfig;
use clarity_api::guest_cache::InMemoryGuestCache;
use clarity_api::router::build_app_router;
use clarity_api::state::AppState;
use clarity_db::models::profile::CreateProfile;
use clarity_db::repositories::ProfileRepo;

/// Secret shared between minted test tokens and the test config.
pub const TEST_JWT_SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3001".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
        },
        guest_cache_dir: PathBuf::from("data/guest-cache-test"),
    }
}

/// Build the application router with the advisor pointed at `advisor_url`
/// (a wiremock server in analyze tests, an unused address elsewhere).
pub fn build_test_app_with_advisor(pool: PgPool, advisor_url: &str) -> Router {
    let config = test_config();
    let advisor = AdvisorService::new(GeminiConfig {
        api_url: advisor_url.to_string(),
        api_key: "test-key".to_string(),
        model: "test-model".to_string(),
    });

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        advisor: Arc::new(advisor),
        guest_cache: Arc::new(InMemoryGuestCache::default()),
    };

    build_app_router(state, &config)
}

/// Build the application router for tests that never call the advisor.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_advisor(pool, "http://127.0.0.1:9")
}

/// Mint a valid access token for a user, as the auth provider would.
pub fn auth_token(user_id: i64) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: user_id,
        exp: now + 900,
        iat: now,
        email: None,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .expect("token encoding should succeed")
}

/// Create a profile row, as the auth provider's provisioning would.
pub async fn create_user(pool: &PgPool, email: &str) -> i64 {
    ProfileRepo::create(
        pool,
        &CreateProfile {
            email: email.to_string(),
            display_name: None,
        },
    )
    .await
    .expect("profile creation should succeed")
    .id
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone()
        .oneshot(request)
        .await
        .expect("request should not fail at the transport level")
}

pub async fn get(app: &Router, uri: &str) -> Response {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn get_auth(app: &Router, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json_auth(
    app: &Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn put_json_auth(
    app: &Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response {
    let request = Request::builder()
        .method("PUT")
        .uri(uri)
        .header("Content-Type", "application/json")
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Read and parse a JSON response body.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}
