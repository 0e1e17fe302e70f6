//! Password reset code model.

use sqlx::FromRow;

use folio_core::types::{DbId, Timestamp};

/// A row from the `password_reset_tokens` table.
///
/// Never serialized to API responses as a whole; only the `otp` string
/// itself travels (and only on the issuing response).
#[derive(Debug, Clone, FromRow)]
pub struct PasswordResetToken {
    pub id: DbId,
    pub user_id: DbId,
    pub otp: String,
    pub expires_at: Timestamp,
    pub created_at: Timestamp,
}

impl PasswordResetToken {
    /// Whether the code's expiry instant has passed.
    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.expires_at < now
    }
}
