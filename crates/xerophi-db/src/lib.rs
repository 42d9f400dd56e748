//! Xerophi Database: connection holders for the document store
//! (SurrealDB) and the key-value store (Redis), schema migrations and
//! the user repository.
//!
//! This crate provides:
//! - Connection management ([`DbManager`], [`DbConfig`],
//!   [`CacheManager`], [`CacheConfig`])
//! - Schema initialization and migrations ([`run_migrations`])
//! - The SurrealDB [`UserRepository`](xerophi_core::repository::UserRepository)
//!   implementation ([`repository::SurrealUserRepository`])
//! - Error types ([`DbError`])

mod cache;
mod connection;
mod error;
pub mod repository;
mod schema;

pub use cache::{CacheConfig, CacheManager};
pub use connection::{DbConfig, DbManager};
pub use error::DbError;
pub use schema::{run_migrations, schema_v1};
