//! Book entity model, DTOs, and listing parameters.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use folio_core::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// Full book row from the `books` table.
///
/// `price` is stored as `NUMERIC(10,2)`; queries project it as `float8`
/// so the wire type stays a plain JSON number.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub thumbnail: Option<String>,
    pub author_id: DbId,
    pub category_id: DbId,
    pub user_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Listing view joining in author and category names.
///
/// The joins are LEFT JOINs, so both names are optional even though the
/// foreign keys are NOT NULL today.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookSummary {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub thumbnail: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a book. `user_id` comes from the authenticated session,
/// not the request body.
#[derive(Debug, Clone)]
pub struct CreateBook {
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub thumbnail: Option<String>,
    pub author_id: DbId,
    pub category_id: DbId,
}

/// DTO for updating a book. Only non-`None` fields are applied.
#[derive(Debug, Clone, Default)]
pub struct UpdateBook {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub thumbnail: Option<String>,
    pub author_id: Option<DbId>,
    pub category_id: Option<DbId>,
}

/// Sort direction for book listings (by title).
#[derive(Debug, Clone, Copy, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// SQL keyword for interpolation into ORDER BY clauses.
    pub fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Query parameters for `GET /api/books`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookListParams {
    /// 1-based page number. Defaults to 1.
    pub page: Option<i64>,
    /// Page size. Defaults to 10, capped at 100.
    pub limit: Option<i64>,
    /// Case-insensitive title substring match.
    pub search: Option<String>,
    /// Title sort direction. Defaults to ascending.
    pub sort: Option<SortOrder>,
    pub category_id: Option<DbId>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}
