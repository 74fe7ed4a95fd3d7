use axum::{extract::FromRequestParts, http::request::Parts};
use shared_types::{AppError, Claims, ClaimsState};

/// Extractor for the settled claims state. Never fails; a request that
/// bypassed `auth_middleware` reads as anonymous.
pub struct Session(pub ClaimsState);

impl<S: Send + Sync> FromRequestParts<S> for Session {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Session(
            parts
                .extensions
                .get::<ClaimsState>()
                .cloned()
                .unwrap_or(ClaimsState::Resolved(None)),
        ))
    }
}

/// Extractor that requires authentication. Returns 401 if no valid token.
pub struct AuthRequired(pub Claims);

impl<S: Send + Sync> FromRequestParts<S> for AuthRequired {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        super::request_claims(&parts.extensions)
            .cloned()
            .map(AuthRequired)
            .ok_or_else(|| AppError::unauthorized("Authentication required"))
    }
}
