use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::book::{Book, BookListParams, BookSummary, CreateBook, UpdateBook};
use folio_db::repositories::BookRepo;

use crate::error::AppResult;
use crate::middleware::AuthUser;
use crate::response::MessageResponse;
use crate::state::AppState;

// ---- Request types ----

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookRequest {
    #[validate(length(min = 2, message = "title must be at least 2 characters"))]
    pub title: String,
    pub description: Option<String>,
    #[validate(range(exclusive_min = 0.0, message = "price must be greater than zero"))]
    pub price: f64,
    pub thumbnail: Option<String>,
    pub author_id: DbId,
    pub category_id: DbId,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookRequest {
    #[validate(length(min = 2, message = "title must be at least 2 characters"))]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(range(exclusive_min = 0.0, message = "price must be greater than zero"))]
    pub price: Option<f64>,
    pub thumbnail: Option<String>,
    pub author_id: Option<DbId>,
    pub category_id: Option<DbId>,
}

// ---- Handlers ----

/// `GET /api/books`
///
/// Paginated catalog listing with title search, sort direction, and
/// category/price filters. Items carry author and category names.
pub async fn list_books(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(params): Query<BookListParams>,
) -> AppResult<Json<Vec<BookSummary>>> {
    let books = BookRepo::list(&state.pool, &params).await?;
    Ok(Json(books))
}

/// `GET /api/books/me/list`
///
/// Same shape as the catalog listing, restricted to the caller's books.
pub async fn my_books(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<BookListParams>,
) -> AppResult<Json<Vec<BookSummary>>> {
    let books = BookRepo::list_for_user(&state.pool, auth.user_id, &params).await?;
    Ok(Json(books))
}

/// `GET /api/books/{id}`
pub async fn get_book(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<BookSummary>> {
    let book = BookRepo::find_summary_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::NotFound("Book not found".to_string()))?;
    Ok(Json(book))
}

/// `POST /api/books`
///
/// The created book is owned by the authenticated user.
pub async fn create_book(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateBookRequest>,
) -> AppResult<(StatusCode, Json<Book>)> {
    req.validate()?;

    let book = BookRepo::create(
        &state.pool,
        auth.user_id,
        &CreateBook {
            title: req.title,
            description: req.description,
            price: req.price,
            thumbnail: req.thumbnail,
            author_id: req.author_id,
            category_id: req.category_id,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(book)))
}

/// `PUT /api/books/{id}`
///
/// Partial update. Ownership is enforced in the UPDATE itself, so a book
/// owned by someone else reads as missing.
pub async fn update_book(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(req): Json<UpdateBookRequest>,
) -> AppResult<Json<Book>> {
    req.validate()?;

    let book = BookRepo::update_owned(
        &state.pool,
        id,
        auth.user_id,
        &UpdateBook {
            title: req.title,
            description: req.description,
            price: req.price,
            thumbnail: req.thumbnail,
            author_id: req.author_id,
            category_id: req.category_id,
        },
    )
    .await?
    .ok_or_else(|| CoreError::NotFound("Book not found or not owned by you".to_string()))?;

    Ok(Json(book))
}

/// `DELETE /api/books/{id}`
pub async fn delete_book(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = BookRepo::delete_owned(&state.pool, id, auth.user_id).await?;
    if !deleted {
        return Err(CoreError::NotFound("Book not found or not owned by you".to_string()).into());
    }
    Ok(Json(MessageResponse::new("Book deleted successfully")))
}
