use crate::auth::use_permissions;
use crate::routes::Route;
use dioxus::prelude::*;

/// Render `children` only when the current principal may open `module`.
///
/// Shows a placeholder while claims load and redirects to the unauthorized
/// view when access is denied. Omit `module` for public content.
#[component]
pub fn PermissionGate(module: Option<String>, children: Element) -> Element {
    let permissions = use_permissions();

    if permissions.is_loading() {
        return rsx! {
            div { class: "permission-gate-loading",
                p { "Loading..." }
            }
        };
    }

    if permissions.has_permission(module.as_deref()) {
        rsx! { {children} }
    } else {
        tracing::debug!(module = ?module, "access denied, redirecting");
        navigator().replace(Route::Unauthorized {});
        rsx! {
            div { class: "permission-gate-loading",
                p { "Redirecting..." }
            }
        }
    }
}
