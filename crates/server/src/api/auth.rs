// Server-only helpers for server functions.

use shared_types::ClaimsState;

use crate::auth::reader::resolve_claims;

/// Settled claims for the current request.
/// Uses the state `auth_middleware` stored, or reads the credential directly
/// when the middleware did not run.
pub(crate) fn current_claims_state() -> ClaimsState {
    let Some(ctx) = dioxus::fullstack::FullstackContext::current() else {
        tracing::debug!("no request context, treating caller as anonymous");
        return ClaimsState::Resolved(None);
    };

    let parts = ctx.parts_mut();

    if let Some(state) = parts.extensions.get::<ClaimsState>() {
        return state.clone();
    }

    let secret = crate::config::jwt_secret();
    resolve_claims(&parts.headers, secret.as_deref())
}
