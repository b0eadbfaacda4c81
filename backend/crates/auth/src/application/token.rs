//! Refresh Token Signing
//!
//! Refresh tokens have the form `"{user_id}.{base64url(hmac)}"` where the
//! signature is HMAC-SHA256 over the user-id string. Verification rejects
//! malformed or forged tokens before any database access; the stored-token
//! comparison that makes logout effective happens in the use cases.

use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use uuid::Uuid;

use crate::error::{AuthError, AuthResult};

/// Generate a signed refresh token for a user.
pub fn generate(user_id: Uuid, secret: &[u8; 32]) -> String {
    let user_id_str = user_id.to_string();

    let mut mac =
        Hmac::<Sha256>::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(user_id_str.as_bytes());
    let signature = mac.finalize().into_bytes();

    format!(
        "{}.{}",
        user_id_str,
        base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(signature)
    )
}

/// Verify a refresh token's signature and extract the user id.
pub fn verify(token: &str, secret: &[u8; 32]) -> AuthResult<Uuid> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 2 {
        return Err(AuthError::TokenInvalid);
    }

    let user_id_str = parts[0];
    let signature_b64 = parts[1];

    let mut mac =
        Hmac::<Sha256>::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(user_id_str.as_bytes());

    let signature = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(signature_b64)
        .map_err(|_| AuthError::TokenInvalid)?;

    mac.verify_slice(&signature)
        .map_err(|_| AuthError::TokenInvalid)?;

    user_id_str.parse().map_err(|_| AuthError::TokenInvalid)
}
