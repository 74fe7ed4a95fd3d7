use axum::{
    body::Body,
    http::{header, HeaderMap, Request, StatusCode},
    Router,
};
use serde_json::Value;
use shared_types::{AuthSettings, Claims, TOKEN_TYPE_ACCESS};
use tower::ServiceExt;

pub const TEST_SECRET: &str = "integration-test-secret";
pub const TEST_LOGIN_URL: &str = "https://id.salon.test/sign-in";

/// Build the REST router with a known signing secret.
pub fn test_app() -> Router {
    server::rest::api_router(server::state::AppState::new(
        Some(TEST_SECRET.to_string()),
        AuthSettings {
            login_url: TEST_LOGIN_URL.to_string(),
        },
    ))
}

/// Build the REST router with no signing secret configured.
pub fn test_app_without_secret() -> Router {
    server::rest::api_router(server::state::AppState::new(None, AuthSettings::default()))
}

/// Create an access token for a principal with the given modules.
pub fn create_test_token(is_super_admin: bool, modules: &[&str]) -> String {
    server::auth::jwt::create_access_token(
        "101",
        Some("staff@salon.test"),
        is_super_admin,
        modules.iter().copied(),
        TEST_SECRET,
    )
    .expect("Failed to create test JWT")
}

/// Create a token that expired an hour ago.
pub fn create_expired_token(modules: &[&str]) -> String {
    create_token_expired_for(3600, modules)
}

/// Create a token whose `exp` lies `seconds` in the past.
pub fn create_token_expired_for(seconds: i64, modules: &[&str]) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: "101".to_string(),
        email: None,
        is_super_admin: false,
        permissions: modules.iter().map(|m| m.to_string()).collect(),
        iat: now - seconds - 3600,
        exp: now - seconds,
        jti: None,
        typ: TOKEN_TYPE_ACCESS.to_string(),
    };
    server::auth::jwt::encode_claims(&claims, TEST_SECRET).expect("Failed to create test JWT")
}

/// Build claims directly, for evaluator-level tests.
pub fn claims(is_super_admin: bool, modules: &[&str]) -> Claims {
    Claims {
        sub: "101".to_string(),
        email: None,
        is_super_admin,
        permissions: modules.iter().map(|m| m.to_string()).collect(),
        exp: i64::MAX,
        iat: 0,
        jti: None,
        typ: TOKEN_TYPE_ACCESS.to_string(),
    }
}

/// GET a route without credentials.
pub async fn get(app: &Router, uri: &str) -> (StatusCode, HeaderMap, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, req).await
}

/// GET a route with a Bearer token.
pub async fn get_authed(app: &Router, uri: &str, token: &str) -> (StatusCode, HeaderMap, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    send(app, req).await
}

/// GET a route with the session cookie set.
pub async fn get_with_cookie(app: &Router, uri: &str, token: &str) -> (StatusCode, HeaderMap, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::COOKIE, format!("salon_access={}", token))
        .body(Body::empty())
        .unwrap();

    send(app, req).await
}

/// POST JSON to a route.
pub async fn post_json(app: &Router, uri: &str, body: &str) -> (StatusCode, HeaderMap, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    send(app, req).await
}

/// DELETE a route.
pub async fn delete(app: &Router, uri: &str) -> (StatusCode, HeaderMap, Value) {
    let req = Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, req).await
}

/// Send a request through the router and parse the response.
async fn send(app: &Router, req: Request<Body>) -> (StatusCode, HeaderMap, Value) {
    let response = app
        .clone()
        .oneshot(req)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let headers = response.headers().clone();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");

    let body: Value = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&body_bytes).to_string(),
        ))
    };

    (status, headers, body)
}

/// The first Set-Cookie header, as a string.
pub fn set_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
