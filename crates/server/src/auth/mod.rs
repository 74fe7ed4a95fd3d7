pub mod cookies;
pub mod extractors;
pub mod jwt;
pub mod middleware;
pub mod reader;

use shared_types::{AppError, Claims, ClaimsState};

/// Require access to `module_id` for an already-settled request.
///
/// An empty module id is public. Otherwise a missing principal is 401 and a
/// principal without the module is 403.
pub fn ensure_module_access(state: &ClaimsState, module_id: &str) -> Result<(), AppError> {
    if state.has_permission(Some(module_id)) {
        return Ok(());
    }
    match state.claims() {
        None => Err(AppError::unauthorized("Authentication required")),
        Some(claims) => {
            tracing::info!(subject = %claims.sub, module = module_id, "module access denied");
            Err(AppError::forbidden(format!(
                "Access to the {} module is not permitted",
                shared_types::module::label(module_id)
            )))
        }
    }
}

/// Claims for the request, if the middleware resolved any.
pub fn request_claims(extensions: &axum::http::Extensions) -> Option<&Claims> {
    extensions.get::<ClaimsState>().and_then(ClaimsState::claims)
}
