//! Route definitions for the `/profile` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::profile;
use crate::state::AppState;

/// Routes mounted at `/profile` (all require auth).
///
/// ```text
/// GET /                  -> current user's profile
/// PUT /                  -> update username / full name / phone number
/// PUT /change-password   -> change password (revokes all sessions)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(profile::get_profile).put(profile::update_profile))
        .route("/change-password", put(profile::change_password))
}
