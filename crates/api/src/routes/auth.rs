//! Route definitions for the `/auth` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/auth`.
///
/// ```text
/// POST /register         -> register (public)
/// POST /login            -> login (public)
/// POST /logout           -> logout (requires auth)
/// POST /forget-password  -> issue reset code (public)
/// POST /reset-password   -> redeem reset code (public)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/forget-password", post(auth::forget_password))
        .route("/reset-password", post(auth::reset_password))
}
