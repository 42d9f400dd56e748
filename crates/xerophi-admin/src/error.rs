//! Admin console error types.

use thiserror::Error;
use xerophi_auth::AuthError;
use xerophi_core::error::XerophiError;
use xerophi_db::DbError;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum AdminError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Db(#[from] DbError),

    #[error("{0}")]
    Operation(#[from] XerophiError),
}

impl From<AuthError> for AdminError {
    fn from(err: AuthError) -> Self {
        AdminError::Operation(err.into())
    }
}
