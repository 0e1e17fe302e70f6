pub mod auth;
pub mod authors;
pub mod books;
pub mod categories;
pub mod health;
pub mod profile;
pub mod upload;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register              register (public)
/// /auth/login                 login (public)
/// /auth/logout                logout (requires auth)
/// /auth/forget-password       issue reset code (public)
/// /auth/reset-password        redeem reset code (public)
///
/// /books                      list, create (auth required)
/// /books/me/list              caller's own books
/// /books/{id}                 get, update, delete (update/delete match owner only)
///
/// /authors                    list (auth required)
///
/// /categories                 list (auth required)
///
/// /profile                    get, update (auth required)
/// /profile/change-password    change password (auth required)
///
/// /upload/image               image upload (multipart, auth required)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication and password recovery.
        .nest("/auth", auth::router())
        // Book catalog and per-user library.
        .nest("/books", books::router())
        // Reference data for book creation.
        .nest("/authors", authors::router())
        .nest("/categories", categories::router())
        // Account profile and password change.
        .nest("/profile", profile::router())
        // Image upload for book covers.
        .nest("/upload", upload::router())
}
