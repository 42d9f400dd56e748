//! Database-specific error types and conversions.

use xerophi_core::error::XerophiError;

/// Database-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("SurrealDB error: {0}")]
    Surreal(#[from] surrealdb::Error),

    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Migration failed: {0}")]
    Migration(String),

    #[error("Query failed: {0}")]
    Query(String),

    #[error("Record not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Record already exists: {entity}")]
    AlreadyExists { entity: String },
}

impl From<DbError> for XerophiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => XerophiError::NotFound { entity, id },
            DbError::AlreadyExists { entity } => XerophiError::AlreadyExists { entity },
            other => XerophiError::Database(other.to_string()),
        }
    }
}
