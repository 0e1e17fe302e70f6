//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod author_repo;
pub mod book_repo;
pub mod category_repo;
pub mod password_reset_repo;
pub mod tag_repo;
pub mod user_repo;

pub use author_repo::AuthorRepo;
pub use book_repo::BookRepo;
pub use category_repo::CategoryRepo;
pub use password_reset_repo::PasswordResetRepo;
pub use tag_repo::TagRepo;
pub use user_repo::UserRepo;
