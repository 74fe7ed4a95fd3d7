use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Token type carried by dashboard access tokens.
pub const TOKEN_TYPE_ACCESS: &str = "access";
/// Token type carried by refresh tokens. Never accepted as an access credential.
pub const TOKEN_TYPE_REFRESH: &str = "refresh";

/// Identity and authorization facts decoded from a dashboard credential.
///
/// Read-only once decoded: the permission evaluator only compares against it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Unique identifier of the authenticated principal.
    pub sub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Bypasses every module check when set.
    #[serde(default, rename = "isSuperAdmin", alias = "is_super_admin")]
    pub is_super_admin: bool,
    /// Module identifiers the principal may open.
    ///
    /// Module-level only. A finer grain (create/read/update/delete per module)
    /// would extend this with a per-module action set rather than change the
    /// meaning of membership here.
    #[serde(default)]
    pub permissions: BTreeSet<String>,
    /// Expiry as unix seconds.
    pub exp: i64,
    #[serde(default)]
    pub iat: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
    /// Token type discriminator. Empty for tokens issued before it existed.
    #[serde(default)]
    pub typ: String,
}

impl Claims {
    /// True once `now` (unix seconds) has reached the expiry.
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.exp <= now
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(chrono::Utc::now().timestamp())
    }
}

/// Why a credential could not be turned into claims.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClaimsError {
    #[error("signing secret is not configured")]
    MissingSecret,
    #[error("credential has expired")]
    Expired,
    #[error("credential is not an access token")]
    WrongTokenType,
    #[error("credential is invalid: {0}")]
    Invalid(String),
}

/// Source of the current principal's claims.
///
/// `Ok(None)` means no credential is present. Implementations own storage,
/// signature verification and expiry; callers only see the outcome.
pub trait ClaimsReader {
    fn read_claims(&self) -> Result<Option<Claims>, ClaimsError>;
}

/// Reader over an already-decoded value, for wiring and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticClaims(pub Option<Claims>);

impl ClaimsReader for StaticClaims {
    fn read_claims(&self) -> Result<Option<Claims>, ClaimsError> {
        Ok(self.0.clone())
    }
}
