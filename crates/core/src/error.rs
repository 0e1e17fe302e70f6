//! Domain error type shared across crates.
//!
//! `CoreError` carries the caller-visible failure classes; the API crate
//! maps each variant to an HTTP status and error code. Internal causes
//! (database failures, cache failures) are wrapped at the API layer
//! instead so this enum stays dependency-free.

/// Domain-level error for folio operations.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The requested entity does not exist (or is not visible to the caller).
    #[error("{0}")]
    NotFound(String),

    /// The request body or parameters failed validation.
    #[error("{0}")]
    Validation(String),

    /// The operation conflicts with existing state (e.g. duplicate registration).
    #[error("{0}")]
    Conflict(String),

    /// Authentication failed: bad credentials, missing/invalid token, or dead session.
    #[error("{0}")]
    Unauthorized(String),

    /// The supplied password-reset code does not match any live code.
    #[error("{0}")]
    InvalidOtp(String),

    /// The supplied password-reset code matched but its expiry has passed.
    #[error("{0}")]
    OtpExpired(String),

    /// An unexpected internal failure; the message is logged, never leaked.
    #[error("{0}")]
    Internal(String),
}
