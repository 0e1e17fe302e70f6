//! Repository for the `password_reset_tokens` table.
//!
//! Invariant: at most one live reset code per user. `replace_for_user`
//! deletes any existing codes and inserts the new one in a single
//! transaction, and `consume` claims a code with one atomic statement so
//! two concurrent resets can never both succeed with the same code.

use sqlx::PgPool;

use folio_core::types::{DbId, Timestamp};

use crate::models::password_reset::PasswordResetToken;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, otp, expires_at, created_at";

/// Provides issue/claim operations for password reset codes.
pub struct PasswordResetRepo;

impl PasswordResetRepo {
    /// Issue a fresh code for `user_id`, invalidating any earlier ones.
    pub async fn replace_for_user(
        pool: &PgPool,
        user_id: DbId,
        otp: &str,
        expires_at: Timestamp,
    ) -> Result<PasswordResetToken, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM password_reset_tokens WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        let query = format!(
            "INSERT INTO password_reset_tokens (user_id, otp, expires_at)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let token = sqlx::query_as::<_, PasswordResetToken>(&query)
            .bind(user_id)
            .bind(otp)
            .bind(expires_at)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(token)
    }

    /// Atomically claim the code matching `(user_id, otp)`.
    ///
    /// The row is deleted and returned in one statement; the caller checks
    /// expiry on the returned row. `None` means no matching code existed
    /// (never issued, already claimed, or superseded).
    pub async fn consume(
        pool: &PgPool,
        user_id: DbId,
        otp: &str,
    ) -> Result<Option<PasswordResetToken>, sqlx::Error> {
        let query = format!(
            "DELETE FROM password_reset_tokens
             WHERE user_id = $1 AND otp = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PasswordResetToken>(&query)
            .bind(user_id)
            .bind(otp)
            .fetch_optional(pool)
            .await
    }

    /// Count codes currently stored for a user.
    pub async fn count_for_user(pool: &PgPool, user_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM password_reset_tokens WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(pool)
            .await
    }
}
