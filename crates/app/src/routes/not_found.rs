use dioxus::prelude::*;
use shared_types::module;

use crate::auth::use_permissions;
use crate::routes::landing_page;
use crate::routes::unauthorized::SIGN_OUT_PATH;

/// Unknown path. Offers the first granted module, or sign-in when none is.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let permissions = use_permissions();
    let path = format!("/{}", route.join("/"));
    let way_back = landing_page(&permissions).map(|(id, route)| (module::label(id), route));

    rsx! {
        div { class: "status-page",
            div { class: "status-card",
                div { class: "status-code", "404" }
                h1 { class: "status-title", "No Such Page" }
                p { class: "status-message",
                    "Nothing in the salon admin lives at "
                    code { "{path}" }
                    "."
                }
                if let Some((label, target)) = way_back {
                    Link { to: target, class: "status-link primary", "Go to {label}" }
                } else if !permissions.is_loading() {
                    a { class: "status-link primary", href: SIGN_OUT_PATH, "Sign in" }
                }
            }
        }
    }
}
