pub mod modules;
pub mod not_found;
pub mod unauthorized;

use crate::auth::{use_permissions, Permissions};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBell, LdBookOpen, LdBriefcase, LdFileText, LdFolder, LdLayoutDashboard, LdPackage,
    LdSearch, LdSettings, LdShield, LdUserCheck, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::module;

use modules::{
    Categories, Country, Customers, Dashboard, Salons, Services, Settings, Staff, States,
    Stylists, Subscription, Utility,
};
use not_found::NotFound;
use unauthorized::Unauthorized;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/unauthorized")]
    Unauthorized {},
    #[layout(AppLayout)]
    #[route("/")]
    Dashboard {},
    #[route("/salons")]
    Salons {},
    #[route("/services")]
    Services {},
    #[route("/stylists")]
    Stylists {},
    #[route("/customers")]
    Customers {},
    #[route("/states")]
    States {},
    #[route("/categories")]
    Categories {},
    #[route("/country")]
    Country {},
    #[route("/staff")]
    Staff {},
    #[route("/subscription")]
    Subscription {},
    #[route("/utility")]
    Utility {},
    #[route("/settings")]
    Settings {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    /// Page for a module identifier, if the dashboard has one.
    pub fn for_module(module_id: &str) -> Option<Route> {
        let route = match module_id {
            module::DASHBOARD => Route::Dashboard {},
            module::SALONS => Route::Salons {},
            module::SERVICES => Route::Services {},
            module::STYLISTS => Route::Stylists {},
            module::CUSTOMERS => Route::Customers {},
            module::STATES => Route::States {},
            module::CATEGORIES => Route::Categories {},
            module::COUNTRY => Route::Country {},
            module::STAFF => Route::Staff {},
            module::SUBSCRIPTION => Route::Subscription {},
            module::UTILITY => Route::Utility {},
            module::SETTINGS => Route::Settings {},
            _ => return None,
        };
        Some(route)
    }
}

/// First module page the principal may open, in sidebar order.
pub fn landing_page(permissions: &Permissions) -> Option<(&'static str, Route)> {
    module::KNOWN_MODULES
        .iter()
        .copied()
        .filter(|m| permissions.has_permission(Some(*m)))
        .find_map(|m| Route::for_module(m).map(|r| (m, r)))
}

fn nav_icon(module_id: &str) -> Element {
    match module_id {
        module::DASHBOARD => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } },
        module::SALONS => rsx! { Icon::<LdBriefcase> { icon: LdBriefcase, width: 18, height: 18 } },
        module::SERVICES => rsx! { Icon::<LdPackage> { icon: LdPackage, width: 18, height: 18 } },
        module::STYLISTS => rsx! { Icon::<LdUserCheck> { icon: LdUserCheck, width: 18, height: 18 } },
        module::CUSTOMERS => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
        module::STATES | module::COUNTRY => rsx! { Icon::<LdFolder> { icon: LdFolder, width: 18, height: 18 } },
        module::CATEGORIES => rsx! { Icon::<LdBookOpen> { icon: LdBookOpen, width: 18, height: 18 } },
        module::STAFF => rsx! { Icon::<LdShield> { icon: LdShield, width: 18, height: 18 } },
        module::SUBSCRIPTION => rsx! { Icon::<LdBell> { icon: LdBell, width: 18, height: 18 } },
        module::UTILITY => rsx! { Icon::<LdSearch> { icon: LdSearch, width: 18, height: 18 } },
        module::SETTINGS => rsx! { Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 } },
        _ => rsx! { Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 } },
    }
}

/// Main app layout with the sidebar and page outlet.
///
/// The sidebar lists only the modules the principal may open. Pages gate
/// themselves with `PermissionGate`; hiding a link is not a substitute.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let permissions = use_permissions();

    let nav_items: Vec<(&'static str, &'static str, Route)> = if permissions.is_loading() {
        Vec::new()
    } else {
        module::KNOWN_MODULES
            .iter()
            .copied()
            .filter(|m| permissions.has_permission(Some(*m)))
            .filter_map(|m| Route::for_module(m).map(|r| (m, module::label(m), r)))
            .collect()
    };

    let signed_in_as = permissions
        .claims()
        .map(|c| c.email.clone().unwrap_or_else(|| c.sub.clone()));

    rsx! {
        div { class: "app-layout",
            nav { class: "sidebar",
                div { class: "sidebar-brand",
                    span { class: "sidebar-brand-name", "Salon Admin" }
                }
                ul { class: "sidebar-menu",
                    for (module_id, label, target) in nav_items {
                        li {
                            key: "{module_id}",
                            class: if target == route { "sidebar-menu-item active" } else { "sidebar-menu-item" },
                            Link { to: target.clone(), class: "sidebar-link",
                                {nav_icon(module_id)}
                                span { "{label}" }
                            }
                        }
                    }
                }
                if let Some(who) = signed_in_as {
                    div { class: "sidebar-footer", "{who}" }
                }
            }
            main { class: "app-content",
                Outlet::<Route> {}
            }
        }
    }
}
