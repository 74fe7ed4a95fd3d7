use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use shared_types::{Claims, ClaimsError, TOKEN_TYPE_ACCESS, TOKEN_TYPE_REFRESH};

/// Sign arbitrary claims with HS256.
pub fn encode_claims(claims: &Claims, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Issue an access token for a dashboard principal.
pub fn create_access_token<I, S>(
    subject: &str,
    email: Option<&str>,
    is_super_admin: bool,
    permissions: I,
    secret: &str,
) -> Result<String, jsonwebtoken::errors::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let now = Utc::now();
    let claims = Claims {
        sub: subject.to_string(),
        email: email.map(str::to_string),
        is_super_admin,
        permissions: permissions.into_iter().map(Into::into).collect(),
        iat: now.timestamp(),
        exp: (now + Duration::minutes(crate::config::access_token_expiry_minutes())).timestamp(),
        jti: Some(uuid::Uuid::new_v4().to_string()),
        typ: TOKEN_TYPE_ACCESS.to_string(),
    };
    encode_claims(&claims, secret)
}

/// Validate signature and expiry of an access token.
///
/// Expiry is exact: no clock-skew leeway, a token is dead from `exp` on.
/// Rejects `typ: "refresh"`. An empty `typ` is accepted for tokens issued
/// before the discriminator existed.
pub fn validate_access_token(token: &str, secret: &str) -> Result<Claims, ClaimsError> {
    let mut validation = Validation::default();
    validation.leeway = 0;

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => ClaimsError::Expired,
        _ => ClaimsError::Invalid(e.to_string()),
    })?;
    let claims = token_data.claims;
    // jsonwebtoken only rejects once `exp` has passed; it is already dead at `exp`.
    if claims.is_expired() {
        return Err(ClaimsError::Expired);
    }
    if claims.typ == TOKEN_TYPE_REFRESH {
        return Err(ClaimsError::WrongTokenType);
    }
    Ok(claims)
}
