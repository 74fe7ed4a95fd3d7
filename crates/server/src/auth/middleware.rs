use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use super::reader::resolve_claims;
use crate::state::AppState;

/// Permissive auth middleware.
///
/// Reads the request's credential once and stores the settled
/// `ClaimsState` in the request extensions. Invalid or expired credentials
/// settle as "no claims". Never rejects; handlers decide authorization.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let claims_state = resolve_claims(req.headers(), state.jwt_secret.as_deref());
    req.extensions_mut().insert(claims_state);
    next.run(req).await
}
