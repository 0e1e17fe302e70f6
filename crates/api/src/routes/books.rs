//! Route definitions for the `/books` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::books;
use crate::state::AppState;

/// Routes mounted at `/books` (all require auth).
///
/// ```text
/// GET    /          -> paginated catalog listing
/// POST   /          -> create (owned by caller)
/// GET    /me/list   -> caller's own books
/// GET    /{id}      -> single book with author/category names
/// PUT    /{id}      -> partial update (owner only)
/// DELETE /{id}      -> delete (owner only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(books::list_books).post(books::create_book))
        .route("/me/list", get(books::my_books))
        .route(
            "/{id}",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
}
