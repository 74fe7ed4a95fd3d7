use dioxus::prelude::*;
use shared_types::module;

use crate::auth::use_permissions;
use crate::routes::landing_page;

/// Clears the session cookie and redirects to the configured sign-in page.
pub(crate) const SIGN_OUT_PATH: &str = "/api/v1/session/sign-out";

/// Shown when the current principal may not open the requested page.
///
/// The way back points at the first module still granted; with none, only
/// signing in again is offered.
#[component]
pub fn Unauthorized() -> Element {
    let permissions = use_permissions();
    let way_back = landing_page(&permissions).map(|(id, route)| (module::label(id), route));

    rsx! {
        div { class: "status-page",
            div { class: "status-card",
                div { class: "status-code", "403" }
                h1 { class: "status-title", "Access Denied" }
                p { class: "status-message",
                    "Your account is not allowed into this part of the salon admin. "
                    "Ask an administrator for access, or sign in with another account."
                }
                a { class: "status-link primary", href: SIGN_OUT_PATH, "Sign in again" }
                if let Some((label, target)) = way_back {
                    Link { to: target, class: "status-link", "Back to {label}" }
                }
            }
        }
    }
}
