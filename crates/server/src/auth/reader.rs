use axum::http::HeaderMap;
use shared_types::{Claims, ClaimsError, ClaimsReader, ClaimsState, PermissionEvaluator};

use super::{cookies, jwt};

/// Claims reader over a request's persisted credential.
///
/// No credential reads as `Ok(None)`. A credential that fails validation,
/// or any credential when no secret is configured, is an error.
#[derive(Debug, Clone)]
pub struct JwtClaimsReader {
    token: Option<String>,
    secret: Option<String>,
}

impl JwtClaimsReader {
    pub fn new(token: Option<String>, secret: Option<String>) -> Self {
        Self { token, secret }
    }

    /// Take the credential from the session cookie or Bearer header.
    pub fn from_headers(headers: &HeaderMap, secret: Option<&str>) -> Self {
        Self::new(
            cookies::extract_access_token(headers),
            secret.map(str::to_string),
        )
    }
}

impl ClaimsReader for JwtClaimsReader {
    fn read_claims(&self) -> Result<Option<Claims>, ClaimsError> {
        let Some(token) = self.token.as_deref() else {
            return Ok(None);
        };
        let secret = self
            .secret
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or(ClaimsError::MissingSecret)?;
        jwt::validate_access_token(token, secret).map(Some)
    }
}

/// Read and settle the claims for one request.
pub fn resolve_claims(headers: &HeaderMap, secret: Option<&str>) -> ClaimsState {
    PermissionEvaluator::activate(&JwtClaimsReader::from_headers(headers, secret))
        .state()
        .clone()
}
