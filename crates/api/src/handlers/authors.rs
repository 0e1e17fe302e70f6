use axum::extract::State;
use axum::Json;

use folio_db::models::author::Author;
use folio_db::repositories::AuthorRepo;

use crate::error::AppResult;
use crate::middleware::AuthUser;
use crate::state::AppState;

/// `GET /api/authors`
pub async fn list_authors(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<Vec<Author>>> {
    let authors = AuthorRepo::list(&state.pool).await?;
    Ok(Json(authors))
}
