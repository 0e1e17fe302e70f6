//! Shared foundation for the folio backend.
//!
//! Holds the primitive type aliases and the domain error enum used by both
//! the database layer and the API server. Keep this crate free of any web
//! or database dependencies.

pub mod error;
pub mod types;
