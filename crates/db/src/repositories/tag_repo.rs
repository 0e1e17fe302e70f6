//! Repository for the `tags` and `book_tags` tables.

use sqlx::PgPool;

use folio_core::types::DbId;

use crate::models::tag::Tag;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides tag CRUD and book-tag associations.
pub struct TagRepo;

impl TagRepo {
    /// Create a tag or return the existing one with the same name.
    pub async fn create_or_get(pool: &PgPool, name: &str) -> Result<Tag, sqlx::Error> {
        let query = format!(
            "INSERT INTO tags (name)
             VALUES ($1)
             ON CONFLICT ON CONSTRAINT uq_tags_name DO UPDATE SET name = EXCLUDED.name
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tag>(&query)
            .bind(name)
            .fetch_one(pool)
            .await
    }

    /// Attach a tag to a book. Idempotent.
    pub async fn attach(pool: &PgPool, book_id: DbId, tag_id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO book_tags (book_id, tag_id)
             VALUES ($1, $2)
             ON CONFLICT (book_id, tag_id) DO NOTHING",
        )
        .bind(book_id)
        .bind(tag_id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// List all tags attached to a book, ordered by name.
    pub async fn list_for_book(pool: &PgPool, book_id: DbId) -> Result<Vec<Tag>, sqlx::Error> {
        sqlx::query_as::<_, Tag>(
            "SELECT t.id, t.name, t.created_at, t.updated_at
             FROM book_tags bt
             JOIN tags t ON t.id = bt.tag_id
             WHERE bt.book_id = $1
             ORDER BY t.name",
        )
        .bind(book_id)
        .fetch_all(pool)
        .await
    }
}
