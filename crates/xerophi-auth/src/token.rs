//! Administrative token issuance.
//!
//! The console's generate-token command goes through [`TokenIssuer`] so
//! that the credential format can be swapped without touching the menu.
//! The shipped [`OpaqueTokenIssuer`] produces a random opaque string and
//! carries no claims, signature or expiry.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use sha2::{Digest, Sha256};

use crate::error::AuthError;

/// A freshly issued credential.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// Raw token, shown to the operator once.
    pub token: String,
    /// SHA-256 hex digest of `token`, suitable for storage.
    pub digest: String,
}

pub trait TokenIssuer {
    fn issue(&self) -> Result<IssuedToken, AuthError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OpaqueTokenIssuer;

impl TokenIssuer for OpaqueTokenIssuer {
    fn issue(&self) -> Result<IssuedToken, AuthError> {
        let token = generate_opaque_token();
        let digest = hash_token(&token);
        Ok(IssuedToken { token, digest })
    }
}

/// Generate a cryptographically random opaque token
/// (32 bytes → base64url-encoded, no padding).
pub fn generate_opaque_token() -> String {
    let mut rng = rand::rng();
    let bytes: [u8; 32] = rand::Rng::random(&mut rng);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// SHA-256 hash of a raw token, hex-encoded.
pub fn hash_token(raw: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(raw.as_bytes());
    hex::encode(hasher.finalize())
}
