//! Repository for the `books` table.
//!
//! Listing queries use NULL-tolerant predicates (`$n IS NULL OR ...`) so a
//! single prepared statement covers every filter combination. Mutations are
//! scoped by `(id, user_id)`: a book can only be changed by its creator.

use sqlx::PgPool;

use folio_core::types::DbId;

use crate::models::book::{Book, BookListParams, BookSummary, CreateBook, UpdateBook};

/// Column list for full `books` rows. `price` is projected to `float8`.
const COLUMNS: &str = "\
    id, title, description, price::float8 AS price, thumbnail, \
    author_id, category_id, user_id, created_at, updated_at";

/// Column list for the listing view (author and category names joined in).
const SUMMARY_COLUMNS: &str = "\
    b.id, b.title, b.description, b.price::float8 AS price, b.thumbnail, \
    a.name AS author, c.name AS category";

/// Shared FROM/JOIN clause for summary queries.
const SUMMARY_FROM: &str = "\
    FROM books b \
    LEFT JOIN authors a ON a.id = b.author_id \
    LEFT JOIN categories c ON c.id = b.category_id";

/// Default page size for book listing.
const DEFAULT_LIMIT: i64 = 10;

/// Maximum page size for book listing.
const MAX_LIMIT: i64 = 100;

/// Provides CRUD operations for books.
pub struct BookRepo;

impl BookRepo {
    /// Insert a new book owned by `user_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateBook,
    ) -> Result<Book, sqlx::Error> {
        let query = format!(
            "INSERT INTO books (title, description, price, thumbnail, author_id, category_id, user_id)
             VALUES ($1, $2, $3::numeric, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.price)
            .bind(&input.thumbnail)
            .bind(input.author_id)
            .bind(input.category_id)
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// Find a full book row by ID, regardless of owner.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Book>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM books WHERE id = $1");
        sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the listing view of a book by ID.
    pub async fn find_summary_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<BookSummary>, sqlx::Error> {
        let query = format!("SELECT {SUMMARY_COLUMNS} {SUMMARY_FROM} WHERE b.id = $1");
        sqlx::query_as::<_, BookSummary>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List books with pagination, optional title search, price/category
    /// filters, and title sort.
    pub async fn list(
        pool: &PgPool,
        params: &BookListParams,
    ) -> Result<Vec<BookSummary>, sqlx::Error> {
        let (limit, offset) = page_bounds(params);
        let sort = params.sort.unwrap_or_default().as_sql();

        let query = format!(
            "SELECT {SUMMARY_COLUMNS} {SUMMARY_FROM}
             WHERE ($1::text IS NULL OR b.title ILIKE '%' || $1 || '%')
               AND ($2::bigint IS NULL OR b.category_id = $2)
               AND ($3::float8 IS NULL OR b.price >= $3::numeric)
               AND ($4::float8 IS NULL OR b.price <= $4::numeric)
             ORDER BY b.title {sort}
             LIMIT $5 OFFSET $6"
        );
        sqlx::query_as::<_, BookSummary>(&query)
            .bind(&params.search)
            .bind(params.category_id)
            .bind(params.min_price)
            .bind(params.max_price)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// List books owned by `user_id`, with the same filters as [`Self::list`].
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        params: &BookListParams,
    ) -> Result<Vec<BookSummary>, sqlx::Error> {
        let (limit, offset) = page_bounds(params);
        let sort = params.sort.unwrap_or_default().as_sql();

        let query = format!(
            "SELECT {SUMMARY_COLUMNS} {SUMMARY_FROM}
             WHERE b.user_id = $1
               AND ($2::text IS NULL OR b.title ILIKE '%' || $2 || '%')
               AND ($3::bigint IS NULL OR b.category_id = $3)
               AND ($4::float8 IS NULL OR b.price >= $4::numeric)
               AND ($5::float8 IS NULL OR b.price <= $5::numeric)
             ORDER BY b.title {sort}
             LIMIT $6 OFFSET $7"
        );
        sqlx::query_as::<_, BookSummary>(&query)
            .bind(user_id)
            .bind(&params.search)
            .bind(params.category_id)
            .bind(params.min_price)
            .bind(params.max_price)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update a book owned by `user_id`. Only non-`None` fields are applied.
    ///
    /// Returns `None` if the book does not exist or belongs to someone else.
    pub async fn update_owned(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        input: &UpdateBook,
    ) -> Result<Option<Book>, sqlx::Error> {
        let query = format!(
            "UPDATE books SET
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                price = COALESCE($5::numeric, price),
                thumbnail = COALESCE($6, thumbnail),
                author_id = COALESCE($7, author_id),
                category_id = COALESCE($8, category_id),
                updated_at = NOW()
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.price)
            .bind(&input.thumbnail)
            .bind(input.author_id)
            .bind(input.category_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a book owned by `user_id`.
    ///
    /// Returns `false` if the book does not exist or belongs to someone else.
    pub async fn delete_owned(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Clamp pagination parameters and convert the 1-based page to an offset.
fn page_bounds(params: &BookListParams) -> (i64, i64) {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let page = params.page.unwrap_or(1).max(1);
    (limit, (page - 1) * limit)
}
