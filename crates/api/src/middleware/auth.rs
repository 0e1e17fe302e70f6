//! JWT-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use folio_core::error::CoreError;
use folio_core::types::DbId;

use crate::auth::jwt;
use crate::error::AppError;
use crate::state::AppState;

/// Extractor for authenticated requests.
///
/// Validates the `Authorization: Bearer <token>` header, checks the session
/// cache when the token carries a session id, and makes the authenticated
/// user id available to handlers.
///
/// Tokens with a session id must still be present in the cache: a logged-out
/// or revoked session is rejected even when the JWT itself has not expired.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Id of the authenticated user.
    pub user_id: DbId,
    /// Session id (`jti`) from the token, when one was issued with it.
    pub session_id: Option<String>,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get("authorization")
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                CoreError::Unauthorized("Missing Authorization header".to_string())
            })?;

        let token = header.strip_prefix("Bearer ").ok_or_else(|| {
            CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".to_string(),
            )
        })?;

        let claims = jwt::validate_token(token, &state.config.jwt)
            .map_err(|_| CoreError::Unauthorized("Invalid token".to_string()))?;

        // A token that carries a session id is only valid while that session
        // is still in the cache. Tokens without one skip the cache check.
        if let Some(jti) = &claims.jti {
            let cached = state.sessions.get(jti).await?;
            if cached.is_none() {
                return Err(CoreError::Unauthorized("Session expired".to_string()).into());
            }
        }

        Ok(AuthUser {
            user_id: claims.sub,
            session_id: claims.jti,
        })
    }
}
