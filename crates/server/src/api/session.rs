use dioxus::prelude::*;
use shared_types::Claims;

#[cfg(feature = "server")]
use super::auth::current_claims_state;

/// Claims of the caller, or `None` without a valid credential.
///
/// Never fails for a bad credential: invalid and expired tokens read as
/// `None` so the client evaluator fails closed.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_current_claims() -> Result<Option<Claims>, ServerFnError> {
    Ok(current_claims_state().claims().cloned())
}
