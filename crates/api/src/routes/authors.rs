//! Route definitions for the `/authors` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::authors;
use crate::state::AppState;

/// Routes mounted at `/authors`.
///
/// ```text
/// GET / -> full author list (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(authors::list_authors))
}
