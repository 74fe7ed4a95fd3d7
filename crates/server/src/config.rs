use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Read `config.toml` and `.env`, then store the parsed config in the global
/// `OnceLock`. Only the first call has effect.
///
/// If the file is missing or unparseable, defaults are used.
pub fn load_config() {
    CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();
        match std::fs::read_to_string(CONFIG_PATH) {
            Ok(contents) => AppConfig::from_toml_str(&contents).unwrap_or_else(|e| {
                tracing::warn!(path = CONFIG_PATH, error = %e, "failed to parse config, using defaults");
                AppConfig::default()
            }),
            Err(e) => {
                tracing::info!(path = CONFIG_PATH, error = %e, "config file not found, using defaults");
                AppConfig::default()
            }
        }
    });
}

/// Get the loaded config. Returns defaults if `load_config()` hasn't been
/// called yet.
pub fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::default)
}

/// HS256 signing secret for dashboard tokens. `None` when unset or empty,
/// in which case every credential is rejected.
pub fn jwt_secret() -> Option<String> {
    std::env::var("JWT_SECRET").ok().filter(|s| !s.is_empty())
}

pub fn access_token_expiry_minutes() -> i64 {
    std::env::var("JWT_ACCESS_TOKEN_EXPIRY_MINUTES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(15)
}

pub fn cookie_secure() -> bool {
    std::env::var("COOKIE_SECURE")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(false)
}

pub fn cookie_domain() -> Option<String> {
    std::env::var("COOKIE_DOMAIN")
        .ok()
        .filter(|d| !d.is_empty())
}
