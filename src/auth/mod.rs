//! Session token module
//!
//! Issues and verifies HS256-signed session tokens with a fixed one-hour
//! validity window, and provides the `AuthClaims` extractor used to gate
//! protected routes. All session state lives in the token itself; there is
//! no server-side session store or revocation list.

use std::time::{SystemTime, UNIX_EPOCH};

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// Token validity window from issuance (1 hour)
pub const TOKEN_TTL_SECS: u64 = 3600;

/// Claims embedded in a session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Student identifier
    pub sub: Uuid,
    /// Student email at issuance time
    pub email: String,
    /// Issued at (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp, validated by jsonwebtoken)
    pub exp: u64,
}

/// Signing and verification keys derived from the process-wide token secret
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenKeys {
    /// Derive HS256 keys from the configured secret
    pub fn from_secret(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issue a signed token for the given student, expiring in one hour
    pub fn issue(&self, student_id: Uuid, email: &str) -> Result<String, ApiError> {
        let now = epoch_now();
        let claims = Claims {
            sub: student_id,
            email: email.to_string(),
            iat: now,
            exp: now + TOKEN_TTL_SECS,
        };

        encode(&Header::default(), &claims, &self.encoding).map_err(|e| {
            tracing::error!(error = %e, "Failed to sign session token");
            ApiError::internal("Failed to issue session token")
        })
    }

    /// Verify a token's signature and expiry, returning the decoded claims
    pub fn verify(&self, token: &str) -> Result<Claims, ApiError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // No expiry leeway: the validity window ends exactly at `exp`
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    ApiError::auth_error("AUTH_TOKEN_EXPIRED", "Token has expired")
                }
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    ApiError::auth_error("AUTH_INVALID_TOKEN", "Invalid token signature")
                }
                _ => ApiError::auth_error(
                    "AUTH_INVALID_TOKEN",
                    format!("Token validation failed: {}", e),
                ),
            })
    }
}

/// Extract the Bearer token from the Authorization header
fn extract_bearer_token(parts: &Parts) -> Result<&str, ApiError> {
    let auth_header = parts
        .headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or_else(|| {
            ApiError::auth_error("AUTH_MISSING_TOKEN", "Missing Authorization header")
        })?;

    let auth_value = auth_header.to_str().map_err(|_| {
        ApiError::auth_error(
            "AUTH_INVALID_TOKEN",
            "Invalid Authorization header encoding",
        )
    })?;

    auth_value.strip_prefix("Bearer ").ok_or_else(|| {
        ApiError::auth_error(
            "AUTH_INVALID_TOKEN",
            "Authorization header must use Bearer scheme",
        )
    })
}

/// Authenticated session extractor.
///
/// The extractor:
/// 1. Reads the `Authorization: Bearer <token>` header
/// 2. Verifies the token signature and expiry against the process secret
/// 3. Hands the decoded claims to the wrapped handler
///
/// Returns 401 with structured error codes on any failure; the handler is
/// never reached for a rejected request.
pub struct AuthClaims(pub Claims);

impl FromRequestParts<AppState> for AuthClaims {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_bearer_token(parts)?;
        let claims = state.token_keys.verify(token)?;
        Ok(AuthClaims(claims))
    }
}

fn epoch_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
