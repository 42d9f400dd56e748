//! Xerophi Auth: Argon2id password hashing and admin token issuance.

pub mod error;
pub mod password;
pub mod token;

pub use error::AuthError;
pub use password::{hash_password, verify_password};
pub use token::{IssuedToken, OpaqueTokenIssuer, TokenIssuer};
