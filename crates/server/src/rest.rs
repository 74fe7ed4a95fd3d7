use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{AppendHeaders, IntoResponse, Redirect, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use shared_types::{module, AccessDecision, AppError, Claims, ClaimsReader, PermissionSummary};
use tower_http::trace::TraceLayer;

use crate::auth::{
    self, cookies,
    extractors::{AuthRequired, Session}, middleware::auth_middleware, reader::JwtClaimsReader,
};
use crate::health;
use crate::state::AppState;

/// Body of `POST /api/v1/session`: a token issued by the identity service.
#[derive(Debug, Deserialize)]
pub struct SessionRequest {
    pub token: String,
}

/// A protected area the caller was allowed into.
#[derive(Debug, Serialize)]
pub struct ModuleInfo {
    pub id: String,
    pub label: String,
}

/// REST routes without middleware, for merging into a larger router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/v1/session",
            get(current_session).post(create_session).delete(end_session),
        )
        .route("/api/v1/session/sign-out", get(sign_out))
        .route("/api/v1/session/permissions", get(session_permissions))
        .route("/api/v1/access/{module}", get(check_access))
        .route("/api/v1/modules/{module}", get(open_module))
        .route("/health", get(health::health_check))
}

/// Standalone REST router with the auth middleware and request tracing.
pub fn api_router(state: AppState) -> Router {
    api_routes()
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Claims of the signed-in principal.
async fn current_session(AuthRequired(claims): AuthRequired) -> Json<Claims> {
    Json(claims)
}

/// Persist a credential as the session cookie after validating it.
async fn create_session(
    State(state): State<AppState>,
    Json(body): Json<SessionRequest>,
) -> Result<Response, AppError> {
    let token = body.token.trim();
    if token.is_empty() {
        return Err(AppError::bad_request("Token is required"));
    }

    let reader = JwtClaimsReader::new(
        Some(token.to_string()),
        state.jwt_secret.as_deref().map(str::to_string),
    );
    let claims = match reader.read_claims() {
        Ok(Some(claims)) => claims,
        other => {
            tracing::warn!(error = ?other.err(), "rejected session credential");
            return Err(AppError::unauthorized("Invalid or expired credential"));
        }
    };

    let remaining_minutes = ((claims.exp - chrono::Utc::now().timestamp()) / 60).max(1);
    let cookie = cookies::build_access_cookie(token, remaining_minutes)
        .map_err(|e| AppError::internal(format!("Failed to build session cookie: {e}")))?;

    tracing::info!(subject = %claims.sub, "session established");
    let summary = PermissionSummary::evaluate(Some(&claims), module::KNOWN_MODULES);
    Ok((AppendHeaders([(header::SET_COOKIE, cookie)]), Json(summary)).into_response())
}

/// Drop the session cookie.
async fn end_session() -> Result<Response, AppError> {
    let cookie = cookies::build_clear_cookie()
        .map_err(|e| AppError::internal(format!("Failed to build session cookie: {e}")))?;
    Ok((
        StatusCode::NO_CONTENT,
        AppendHeaders([(header::SET_COOKIE, cookie)]),
    )
        .into_response())
}

/// Drop the session cookie and send the browser to the sign-in page.
async fn sign_out(State(state): State<AppState>) -> Result<Response, AppError> {
    let cookie = cookies::build_clear_cookie()
        .map_err(|e| AppError::internal(format!("Failed to build session cookie: {e}")))?;
    Ok((
        AppendHeaders([(header::SET_COOKIE, cookie)]),
        Redirect::to(&state.auth.login_url),
    )
        .into_response())
}

async fn session_permissions(Session(session): Session) -> Json<PermissionSummary> {
    Json(PermissionSummary::evaluate(
        session.claims(),
        module::KNOWN_MODULES,
    ))
}

/// Report the decision for one module without failing the request.
async fn check_access(
    Path(module_id): Path<String>,
    Session(session): Session,
) -> Json<AccessDecision> {
    let granted = session.has_permission(Some(module_id.as_str()));
    Json(AccessDecision {
        module: module_id,
        granted,
    })
}

/// 401/403 unless the caller may open the module.
async fn open_module(
    Path(module_id): Path<String>,
    Session(session): Session,
) -> Result<Json<ModuleInfo>, AppError> {
    auth::ensure_module_access(&session, &module_id)?;
    Ok(Json(ModuleInfo {
        label: module::label(&module_id).to_string(),
        id: module_id,
    }))
}
