//! Route definitions for the `/upload` resource.

use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;

use crate::handlers::upload::{self, MAX_UPLOAD_BYTES};
use crate::state::AppState;

/// Routes mounted at `/upload` (all require auth).
///
/// ```text
/// POST /image -> store an image, respond with its public URL
/// ```
///
/// The body limit sits one megabyte above the per-file cap so multipart
/// framing never trips it before the handler's own size check.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/image", post(upload::upload_image))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + 1024 * 1024))
}
