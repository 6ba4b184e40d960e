//! Bearer token verification and password hashing.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::AppState;

/// JWT claims.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// User id (24-char hex) as subject.
    pub sub: String,
    /// Issued at (unix timestamp).
    pub iat: usize,
    /// Expiration time (unix timestamp).
    pub exp: usize,
}

/// The caller identity extracted from a verified bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: String,
}

impl AuthenticatedUser {
    /// Ownership check: mutation is only allowed for the resource owner.
    pub fn owns(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }
}

/// Create a signed token for a user.
pub fn create_token(user_id: &str, secret: &str, expiry_hours: u64) -> Result<String, AppError> {
    let now = chrono::Utc::now();
    let exp = (now + chrono::Duration::hours(expiry_hours as i64)).timestamp() as usize;

    let claims = Claims { sub: user_id.to_string(), iat: now.timestamp() as usize, exp };

    encode(&Header::default(), &claims, &EncodingKey::from_secret(secret.as_bytes()))
        .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to sign token: {}", e)))
}

/// Validate a token and return its claims.
///
/// Expired tokens are reported separately from malformed/forged ones so the
/// client can tell a stale session from a broken credential.
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, AppError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => {
            AppError::Unauthorized("Session expired, please log in again".to_string())
        }
        _ => AppError::Unauthorized("Invalid token".to_string()),
    })?;

    Ok(token_data.claims)
}

/// Hash a password using Argon2.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to hash password: {}", e)))?;
    Ok(password_hash.to_string())
}

/// Verify a password against a stored hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("invalid password hash: {}", e)))?;
    Ok(Argon2::default().verify_password(password.as_bytes(), &parsed_hash).is_ok())
}

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                state.metrics.inc_auth_failures();
                AppError::Unauthorized("Missing Authorization header".to_string())
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            state.metrics.inc_auth_failures();
            AppError::Unauthorized("Authorization header must be Bearer <token>".to_string())
        })?;

        let claims =
            validate_token(token.trim(), &state.config.auth.jwt_secret).inspect_err(|_| {
                state.metrics.inc_auth_failures();
            })?;

        Ok(AuthenticatedUser { user_id: claims.sub })
    }
}
