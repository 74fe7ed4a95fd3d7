//! Module identifiers naming the protected areas of the dashboard.
//!
//! These are lookup keys only. The evaluator treats any string as a module
//! identifier and never checks it against this list.

pub const DASHBOARD: &str = "dashboard";
pub const STAFF: &str = "staff";
pub const SETTINGS: &str = "settings";
pub const UTILITY: &str = "utility";
pub const SUBSCRIPTION: &str = "subscription";
pub const COUNTRY: &str = "country";
pub const SALONS: &str = "salons";
pub const SERVICES: &str = "services";
pub const STYLISTS: &str = "stylists";
pub const CUSTOMERS: &str = "customers";
pub const STATES: &str = "states";
pub const CATEGORIES: &str = "categories";

/// Every identifier the dashboard itself references, in sidebar order.
pub const KNOWN_MODULES: &[&str] = &[
    DASHBOARD,
    SALONS,
    SERVICES,
    STYLISTS,
    CUSTOMERS,
    STATES,
    CATEGORIES,
    COUNTRY,
    STAFF,
    SUBSCRIPTION,
    UTILITY,
    SETTINGS,
];

/// Human-readable label for a module identifier. Unknown ids echo back.
pub fn label(module_id: &str) -> &str {
    match module_id {
        DASHBOARD => "Dashboard",
        STAFF => "Staff",
        SETTINGS => "Settings",
        UTILITY => "Utility",
        SUBSCRIPTION => "Subscription",
        COUNTRY => "Country",
        SALONS => "Salons",
        SERVICES => "Services",
        STYLISTS => "Stylists",
        CUSTOMERS => "Customers",
        STATES => "States",
        CATEGORIES => "Categories",
        other => other,
    }
}
