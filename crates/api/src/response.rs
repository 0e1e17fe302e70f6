//! Shared response types for API handlers.
//!
//! Use [`MessageResponse`] instead of ad-hoc `serde_json::json!({ "message": ... })`
//! to get compile-time type safety and consistent serialization.

use serde::Serialize;

/// Standard `{ "message": ... }` response for operations without a payload.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
