use axum::http::header::InvalidHeaderValue;
use axum::http::{header, HeaderMap, HeaderValue};
use cookie::Cookie;

use crate::config;

/// Session cookie holding the dashboard access token.
pub const SALON_ACCESS: &str = "salon_access";

/// Build a Set-Cookie header value for the access token.
pub fn build_access_cookie(
    token: &str,
    max_age_minutes: i64,
) -> Result<HeaderValue, InvalidHeaderValue> {
    let mut cookie = Cookie::build((SALON_ACCESS, token))
        .http_only(true)
        .same_site(cookie::SameSite::Lax)
        .path("/")
        .max_age(cookie::time::Duration::seconds(max_age_minutes * 60))
        .secure(config::cookie_secure());

    if let Some(domain) = config::cookie_domain() {
        cookie = cookie.domain(domain);
    }

    HeaderValue::from_str(&cookie.build().to_string())
}

/// Build a Set-Cookie header value that clears the session cookie.
pub fn build_clear_cookie() -> Result<HeaderValue, InvalidHeaderValue> {
    let mut cookie = Cookie::build((SALON_ACCESS, ""))
        .http_only(true)
        .same_site(cookie::SameSite::Lax)
        .path("/")
        .max_age(cookie::time::Duration::ZERO);

    if let Some(domain) = config::cookie_domain() {
        cookie = cookie.domain(domain);
    }

    HeaderValue::from_str(&cookie.build().to_string())
}

/// Extract the access token from the session cookie (preferred) or a
/// Bearer header (fallback for REST clients).
pub fn extract_access_token(headers: &HeaderMap) -> Option<String> {
    if let Some(token) = extract_cookie(headers, SALON_ACCESS) {
        return Some(token);
    }

    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

/// Parse a specific cookie value from the Cookie header.
fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    for header_value in headers.get_all(header::COOKIE) {
        if let Ok(cookie_str) = header_value.to_str() {
            for piece in cookie_str.split(';') {
                if let Ok(c) = Cookie::parse(piece.trim().to_string()) {
                    if c.name() == name && !c.value().is_empty() {
                        return Some(c.value().to_string());
                    }
                }
            }
        }
    }
    None
}
