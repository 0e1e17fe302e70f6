use axum::extract::State;
use axum::Json;

use folio_db::models::category::Category;
use folio_db::repositories::CategoryRepo;

use crate::error::AppResult;
use crate::middleware::AuthUser;
use crate::state::AppState;

/// `GET /api/categories`
pub async fn list_categories(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<Vec<Category>>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(categories))
}
