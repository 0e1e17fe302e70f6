use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use folio_core::error::CoreError;
use folio_db::models::user::{CreateUser, User, UserView};
use folio_db::repositories::{PasswordResetRepo, UserRepo};

use crate::auth::jwt;
use crate::auth::otp::{generate_otp, OTP_TTL_MINUTES};
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::AuthUser;
use crate::response::MessageResponse;
use crate::state::AppState;

// ---- Request / response types ----

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 3, message = "username must be at least 3 characters"))]
    pub username: String,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: String,
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
}

/// Login accepts either the username or the email as `identifier`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "identifier must not be empty"))]
    pub identifier: String,
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ForgetPasswordRequest {
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[validate(length(equal = 6, message = "otp must be 6 digits"))]
    pub otp: String,
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub new_password: String,
    #[validate(must_match(other = "new_password", message = "passwords do not match"))]
    pub confirm_password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserView,
}

/// There is no mail delivery; the code travels back in the response body.
#[derive(Debug, Serialize)]
pub struct ForgetPasswordResponse {
    pub message: String,
    pub otp: String,
}

// ---- Handlers ----

/// `POST /api/auth/register`
///
/// Creates the account, hashes the password with Argon2id, and returns a
/// fresh token so the client is logged in immediately.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    req.validate()?;

    if UserRepo::exists_by_username_or_email(&state.pool, &req.username, &req.email).await? {
        return Err(CoreError::Conflict("User already exists".to_string()).into());
    }

    let password_hash = hash_password(&req.password)
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            username: req.username,
            email: req.email,
            password_hash,
            full_name: req.full_name,
            phone_number: req.phone_number,
        },
    )
    .await?;

    let response = issue_session(&state, &user).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// `POST /api/auth/login`
///
/// Unknown identifier and wrong password fail identically so the response
/// does not reveal which accounts exist.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    req.validate()?;

    let user = UserRepo::find_by_identifier(&state.pool, &req.identifier)
        .await?
        .ok_or_else(|| CoreError::Unauthorized("Invalid credentials".to_string()))?;

    let valid = verify_password(&req.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Failed to verify password: {e}")))?;
    if !valid {
        return Err(CoreError::Unauthorized("Invalid credentials".to_string()).into());
    }

    let response = issue_session(&state, &user).await?;
    Ok(Json(response))
}

/// `POST /api/auth/logout`
///
/// Drops the session from the cache; the token is dead from here on even
/// though its signature stays valid until `exp`.
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<MessageResponse>> {
    if let Some(jti) = &auth.session_id {
        state.sessions.remove(jti).await?;
    }
    Ok(Json(MessageResponse::new("Logged out successfully")))
}

/// `POST /api/auth/forget-password`
///
/// Issues a six-digit reset code valid for fifteen minutes. Re-issuing
/// replaces any previous code for the user.
pub async fn forget_password(
    State(state): State<AppState>,
    Json(req): Json<ForgetPasswordRequest>,
) -> AppResult<Json<ForgetPasswordResponse>> {
    req.validate()?;

    let user = UserRepo::find_by_email(&state.pool, &req.email)
        .await?
        .ok_or_else(|| CoreError::NotFound("User not found".to_string()))?;

    let otp = match &state.config.otp_static {
        Some(fixed) => fixed.clone(),
        None => generate_otp(),
    };
    let expires_at = Utc::now() + Duration::minutes(OTP_TTL_MINUTES);
    PasswordResetRepo::replace_for_user(&state.pool, user.id, &otp, expires_at).await?;

    Ok(Json(ForgetPasswordResponse {
        message: "OTP sent successfully".to_string(),
        otp,
    }))
}

/// `POST /api/auth/reset-password`
///
/// Claims the code atomically, so a second attempt with the same code
/// fails no matter how the first one ended. On success every live session
/// for the user is revoked.
pub async fn reset_password(
    State(state): State<AppState>,
    Json(req): Json<ResetPasswordRequest>,
) -> AppResult<Json<MessageResponse>> {
    req.validate()?;

    let user = UserRepo::find_by_email(&state.pool, &req.email)
        .await?
        .ok_or_else(|| CoreError::NotFound("User not found".to_string()))?;

    let token = PasswordResetRepo::consume(&state.pool, user.id, &req.otp)
        .await?
        .ok_or_else(|| CoreError::InvalidOtp("Invalid OTP".to_string()))?;

    if token.is_expired(Utc::now()) {
        return Err(CoreError::OtpExpired("OTP expired".to_string()).into());
    }

    let password_hash = hash_password(&req.new_password)
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {e}")))?;
    UserRepo::update_password(&state.pool, user.id, &password_hash).await?;

    state.sessions.remove_all_for_user(user.id).await?;

    Ok(Json(MessageResponse::new("Password reset successfully")))
}

// ---- Helpers ----

/// Mint a token for the user and register its session in the cache.
///
/// The cache entry lives exactly as long as the token, so an uncached
/// session id always means logout or revocation, never cache drift.
async fn issue_session(state: &AppState, user: &User) -> AppResult<AuthResponse> {
    let issued = jwt::generate_token(user.id, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Failed to generate token: {e}")))?;

    state
        .sessions
        .put(
            &issued.jti,
            user.id,
            state.config.jwt.expires_in_seconds as u64,
        )
        .await?;

    Ok(AuthResponse {
        token: issued.token,
        user: UserView::from(user.clone()),
    })
}
