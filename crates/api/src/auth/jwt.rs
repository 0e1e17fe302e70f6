//! JWT generation and validation.
//!
//! Tokens are HS256-signed JWTs containing a [`Claims`] payload. Every token
//! minted here carries a `jti` session id whose liveness is tracked in the
//! session cache; a token is only accepted while that cache entry exists.
//! `jti` stays optional on decode so tokens minted without one (alternate
//! clients) still validate.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use folio_core::types::DbId;

/// JWT claims embedded in every token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the user's internal database id.
    pub sub: DbId,
    /// Session id (UUID v4) keying the session cache entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
}

/// Configuration for JWT generation and validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Token lifetime in seconds. Also used as the session cache TTL so the
    /// two cannot drift apart.
    pub expires_in_seconds: i64,
}

/// Default token lifetime in seconds (7 days).
const DEFAULT_EXPIRES_IN_SECONDS: i64 = 604_800;

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var                  | Required | Default           |
    /// |--------------------------|----------|-------------------|
    /// | `JWT_SECRET`             | **yes**  | --                |
    /// | `JWT_EXPIRES_IN_SECONDS` | no       | `604800` (7 days) |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let expires_in_seconds: i64 = std::env::var("JWT_EXPIRES_IN_SECONDS")
            .unwrap_or_else(|_| DEFAULT_EXPIRES_IN_SECONDS.to_string())
            .parse()
            .expect("JWT_EXPIRES_IN_SECONDS must be a valid i64");

        Self {
            secret,
            expires_in_seconds,
        }
    }
}

/// A freshly minted token together with its session id.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// The encoded JWT to hand to the client.
    pub token: String,
    /// The `jti` claim, used as the session cache key.
    pub jti: String,
}

/// Generate an HS256 token for the given user with a fresh session id.
pub fn generate_token(
    user_id: DbId,
    config: &JwtConfig,
) -> Result<IssuedToken, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let jti = Uuid::new_v4().to_string();

    let claims = Claims {
        sub: user_id,
        jti: Some(jti.clone()),
        iat: now,
        exp: now + config.expires_in_seconds,
    };

    let token = encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )?;

    Ok(IssuedToken { token, jti })
}

/// Validate and decode a token, returning the embedded [`Claims`].
///
/// Validates the signature and expiration automatically.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )?;
    Ok(token_data.claims)
}
