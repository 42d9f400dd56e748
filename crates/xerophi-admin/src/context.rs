//! Collaborators handed to the command handlers.

use xerophi_auth::OpaqueTokenIssuer;

/// Explicitly injected dependencies of the menu loop.
///
/// The document-store handle lives inside `users`; the key-value
/// connection is owned by the caller and never reaches the handlers.
pub struct AdminContext<R, T = OpaqueTokenIssuer> {
    pub users: R,
    pub tokens: T,
}

impl<R> AdminContext<R> {
    pub fn new(users: R) -> Self {
        Self {
            users,
            tokens: OpaqueTokenIssuer,
        }
    }
}

impl<R, T> AdminContext<R, T> {
    pub fn with_token_issuer(users: R, tokens: T) -> Self {
        Self { users, tokens }
    }
}
