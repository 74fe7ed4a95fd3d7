use serde::{Deserialize, Serialize};

fn default_login_url() -> String {
    "/login".to_string()
}

/// Sign-in settings the dashboard exposes to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthSettings {
    /// Where the denial view sends the user to authenticate again.
    #[serde(default = "default_login_url")]
    pub login_url: String,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            login_url: default_login_url(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
///
/// Every section is optional so that a missing or partial file still
/// produces a usable configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub auth: AuthSettings,
}

impl AppConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}
