//! Authenticated Principal
//!
//! The identity the auth middleware resolves from the refresh-token cookie
//! and injects into request extensions. Domain crates downstream of the
//! middleware (reports) consume it without depending on the auth crate.

use uuid::Uuid;

/// The authenticated caller of a request.
#[derive(Debug, Clone)]
pub struct Principal {
    /// Internal user UUID (never serialized to clients)
    pub user_id: Uuid,
    /// Public-facing user identifier
    pub public_id: String,
}

impl Principal {
    pub fn new(user_id: Uuid, public_id: impl Into<String>) -> Self {
        Self {
            user_id,
            public_id: public_id.into(),
        }
    }
}
