use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use folio_core::error::CoreError;
use folio_db::models::user::{UpdateProfile, UserView};
use folio_db::repositories::UserRepo;

use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::AuthUser;
use crate::response::MessageResponse;
use crate::state::AppState;

// ---- Request types ----

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[validate(length(min = 3, message = "username must be at least 3 characters"))]
    pub username: Option<String>,
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1, message = "current password must not be empty"))]
    pub current_password: String,
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub new_password: String,
    #[validate(must_match(other = "new_password", message = "passwords do not match"))]
    pub confirm_password: String,
}

// ---- Handlers ----

/// `GET /api/profile`
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<UserView>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| CoreError::NotFound("User not found".to_string()))?;
    Ok(Json(UserView::from(user)))
}

/// `PUT /api/profile`
///
/// Unset fields keep their current values. A username collision surfaces
/// as a conflict through the unique constraint.
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpdateProfileRequest>,
) -> AppResult<Json<UserView>> {
    req.validate()?;

    let user = UserRepo::update_profile(
        &state.pool,
        auth.user_id,
        &UpdateProfile {
            username: req.username,
            full_name: req.full_name,
            phone_number: req.phone_number,
        },
    )
    .await?
    .ok_or_else(|| CoreError::NotFound("User not found".to_string()))?;

    Ok(Json(UserView::from(user)))
}

/// `PUT /api/profile/change-password`
///
/// Requires the current password. On success every live session for the
/// user is revoked, this one included.
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<ChangePasswordRequest>,
) -> AppResult<Json<MessageResponse>> {
    req.validate()?;

    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| CoreError::NotFound("User not found".to_string()))?;

    let valid = verify_password(&req.current_password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Failed to verify password: {e}")))?;
    if !valid {
        return Err(CoreError::Unauthorized("Current password is incorrect".to_string()).into());
    }

    let password_hash = hash_password(&req.new_password)
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {e}")))?;
    UserRepo::update_password(&state.pool, user.id, &password_hash).await?;

    state.sessions.remove_all_for_user(user.id).await?;

    Ok(Json(MessageResponse::new("Password changed successfully")))
}
