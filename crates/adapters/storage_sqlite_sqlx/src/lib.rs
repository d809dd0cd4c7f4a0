//! # stayhub-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `stayhub-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `stayhub-app` (for port traits) and `stayhub-domain` (for
//! domain types). The `app` and `domain` crates must never reference this
//! adapter.

pub mod error;
pub mod place_repo;
pub mod pool;
pub mod review_repo;
pub mod user_repo;

pub use error::StorageError;
pub use place_repo::SqlitePlaceRepository;
pub use pool::{Config, Database};
pub use review_repo::SqliteReviewRepository;
pub use user_repo::SqliteUserRepository;
