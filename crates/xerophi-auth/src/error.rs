//! Authentication error types.

use thiserror::Error;
use xerophi_core::error::XerophiError;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("password must not be empty")]
    EmptyPassword,

    #[error("cryptography error: {0}")]
    Crypto(String),
}

impl From<AuthError> for XerophiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::EmptyPassword => XerophiError::Validation {
                message: "password must not be empty".into(),
            },
            AuthError::Crypto(msg) => XerophiError::Crypto(msg),
        }
    }
}
