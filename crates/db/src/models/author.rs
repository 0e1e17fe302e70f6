//! Author entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;

use folio_core::types::{DbId, Timestamp};

/// A row from the `authors` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: DbId,
    pub name: String,
    pub bio: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new author.
#[derive(Debug, Clone)]
pub struct CreateAuthor {
    pub name: String,
    pub bio: Option<String>,
}
