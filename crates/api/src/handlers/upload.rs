use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::middleware::AuthUser;
use crate::state::AppState;

/// Content types accepted for image upload.
const ALLOWED_IMAGE_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/webp", "image/gif"];

/// Upper bound on a single uploaded file. The route's body limit sits a
/// little above this so the check here produces the message, not the
/// transport layer.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub url: String,
}

/// `POST /api/upload/image`
///
/// Accepts a single multipart `file` field. The stored name is random so
/// uploads cannot collide or leak the original filename; only the
/// extension survives.
pub async fn upload_image(
    State(state): State<AppState>,
    _auth: AuthUser,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let content_type = field
            .content_type()
            .map(|ct| ct.to_string())
            .unwrap_or_default();
        if !ALLOWED_IMAGE_TYPES.contains(&content_type.as_str()) {
            return Err(AppError::BadRequest(
                "Invalid file type. Only JPEG, PNG, WebP, and GIF are allowed.".to_string(),
            ));
        }

        let extension = field
            .file_name()
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
            .unwrap_or_else(|| extension_for(&content_type).to_string());

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        if data.len() > MAX_UPLOAD_BYTES {
            return Err(AppError::BadRequest(
                "File size exceeds 5MB limit.".to_string(),
            ));
        }

        let filename = format!("{}.{extension}", Uuid::new_v4().simple());
        let dir = std::path::Path::new(&state.config.upload_dir);
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to create upload dir: {e}")))?;
        tokio::fs::write(dir.join(&filename), &data)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to store upload: {e}")))?;

        return Ok(Json(UploadResponse {
            success: true,
            url: format!("{}/uploads/{filename}", state.config.base_url),
        }));
    }

    Err(AppError::BadRequest("No file provided".to_string()))
}

/// Fallback extension when the client supplied no usable filename.
fn extension_for(content_type: &str) -> &'static str {
    match content_type {
        "image/jpeg" => "jpg",
        "image/png" => "png",
        "image/webp" => "webp",
        _ => "gif",
    }
}
