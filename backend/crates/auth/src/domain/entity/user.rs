//! User Entity
//!
//! Core user profile entity containing non-sensitive user data.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{phone::Phone, public_id::PublicId, user_id::UserId};

/// User entity
///
/// Contains the user's profile information.
/// Sensitive auth data (password hash, refresh token) is in the
/// Credentials entity.
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Public-facing nanoid identifier (URL-safe)
    pub public_id: PublicId,
    /// Display name
    pub name: String,
    /// Phone number (unique, used for login)
    pub phone: Phone,
    /// Street address
    pub address: String,
    /// City
    pub city: String,
    /// State / province
    pub state: String,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(name: String, phone: Phone, address: String, city: String, state: String) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            public_id: PublicId::new(),
            name,
            phone,
            address,
            city,
            state,
            created_at: now,
            updated_at: now,
        }
    }
}
