use dioxus::prelude::*;
use shared_types::{Claims, ClaimsState};
use std::future::Future;
use std::pin::Pin;

pub type ClaimsFuture = Pin<Box<dyn Future<Output = Result<Option<Claims>, ServerFnError>>>>;

/// Where `use_permissions` gets the current claims from.
///
/// Provided as context so pages never reach for the credential themselves;
/// swap it to drive the dashboard from a different source.
#[derive(Clone, Copy)]
pub struct ClaimsSource {
    pub read: fn() -> ClaimsFuture,
}

impl ClaimsSource {
    /// Ask the server, which validates the session cookie.
    pub fn server() -> Self {
        Self {
            read: || Box::pin(server::api::get_current_claims()),
        }
    }
}

/// Permission state for one mounted consumer.
#[derive(Clone, Debug, PartialEq)]
pub struct Permissions {
    state: ClaimsState,
}

impl Permissions {
    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn claims(&self) -> Option<&Claims> {
        self.state.claims()
    }

    /// `None` or an empty id is public. Only meaningful once
    /// [`is_loading`](Self::is_loading) is false.
    pub fn has_permission(&self, module_id: Option<&str>) -> bool {
        self.state.has_permission(module_id)
    }
}

/// Hook: read claims once for this mount and expose the evaluator.
///
/// Pending until the read settles; a failed read settles as "no claims".
pub fn use_permissions() -> Permissions {
    let source = try_use_context::<ClaimsSource>().unwrap_or_else(ClaimsSource::server);
    let resource =
        use_resource(move || async move { ClaimsState::from_read((source.read)().await) });
    let state = resource.read().as_ref().cloned().unwrap_or_default();
    Permissions { state }
}
