//! Error types for the Xerophi system.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum XerophiError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Entity already exists: {entity}")]
    AlreadyExists { entity: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Database error: {0}")]
    Database(String),

    #[error("Cryptography error: {0}")]
    Crypto(String),
}

pub type XerophiResult<T> = Result<T, XerophiError>;
