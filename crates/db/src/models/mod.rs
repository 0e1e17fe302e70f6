//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - Create/update DTOs used by the repositories
//! - Query-parameter structs for list endpoints where applicable

pub mod author;
pub mod book;
pub mod category;
pub mod password_reset;
pub mod tag;
pub mod user;
