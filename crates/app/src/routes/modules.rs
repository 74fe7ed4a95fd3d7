//! One page per protected module. Table contents are served elsewhere;
//! these pages only establish the gate and the page frame.

use crate::permission_gate::PermissionGate;
use dioxus::prelude::*;
use shared_types::module;

/// Page frame for a module, rendered only when the module is granted.
#[component]
fn ModulePage(module_id: &'static str, summary: &'static str) -> Element {
    let title = module::label(module_id);

    rsx! {
        PermissionGate { module: module_id.to_string(),
            section { class: "module-page",
                header { class: "module-page-header",
                    h1 { "{title}" }
                    p { class: "module-page-summary", "{summary}" }
                }
                div { class: "module-page-body", id: "{module_id}-table" }
            }
        }
    }
}

macro_rules! module_page {
    ($name:ident, $module:expr, $summary:expr) => {
        #[component]
        pub fn $name() -> Element {
            rsx! { ModulePage { module_id: $module, summary: $summary } }
        }
    };
}

module_page!(Dashboard, module::DASHBOARD, "Bookings and activity across all salons.");
module_page!(Salons, module::SALONS, "Registered salons and their locations.");
module_page!(Services, module::SERVICES, "Services offered and their pricing.");
module_page!(Stylists, module::STYLISTS, "Stylists and the salons they work at.");
module_page!(Customers, module::CUSTOMERS, "Customer accounts and booking history.");
module_page!(States, module::STATES, "States available for salon addresses.");
module_page!(Categories, module::CATEGORIES, "Service categories.");
module_page!(Country, module::COUNTRY, "Countries available for salon addresses.");
module_page!(Staff, module::STAFF, "Dashboard staff accounts and their module access.");
module_page!(Subscription, module::SUBSCRIPTION, "Salon subscription plans.");
module_page!(Utility, module::UTILITY, "Maintenance tools.");
module_page!(Settings, module::SETTINGS, "Platform settings.");
