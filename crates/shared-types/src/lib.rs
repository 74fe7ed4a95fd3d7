pub mod claims;
pub mod config;
pub mod error;
pub mod module;
pub mod permission;

pub use claims::*;
pub use config::*;
pub use error::*;
pub use permission::*;
// Module identifiers stay namespaced: `shared_types::module::STAFF`.
