use shared_types::AuthSettings;
use std::sync::Arc;

/// Shared state for the REST router and the auth middleware.
#[derive(Clone, Debug)]
pub struct AppState {
    /// `None` means no secret is configured; every credential then fails closed.
    pub jwt_secret: Option<Arc<str>>,
    pub auth: AuthSettings,
}

impl AppState {
    pub fn new(jwt_secret: Option<String>, auth: AuthSettings) -> Self {
        Self {
            jwt_secret: jwt_secret.filter(|s| !s.is_empty()).map(Arc::from),
            auth,
        }
    }

    /// Build from `JWT_SECRET` and the loaded `config.toml`.
    pub fn from_env() -> Self {
        crate::config::load_config();
        Self::new(
            crate::config::jwt_secret(),
            crate::config::app_config().auth.clone(),
        )
    }
}
