//! Credentials Entity
//!
//! Authentication credentials for a user.
//! Separated from User entity to isolate sensitive data.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{user_id::UserId, user_password::UserPassword};

/// Credentials entity
///
/// Contains sensitive authentication data:
/// - Password hash
/// - Current refresh token (None while logged out)
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Reference to User
    pub user_id: UserId,
    /// Hashed password
    pub password_hash: UserPassword,
    /// Active refresh token. Set on login, cleared on logout; a request
    /// cookie is only accepted when it matches this value.
    pub refresh_token: Option<String>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Credentials {
    /// Create new credentials
    pub fn new(user_id: UserId, password_hash: UserPassword) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            password_hash,
            refresh_token: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Store a freshly issued refresh token
    pub fn set_refresh_token(&mut self, token: String) {
        self.refresh_token = Some(token);
        self.updated_at = Utc::now();
    }

    /// Revoke the refresh token (logout)
    pub fn clear_refresh_token(&mut self) {
        self.refresh_token = None;
        self.updated_at = Utc::now();
    }

    /// Check a presented token against the stored one in constant time
    pub fn refresh_token_matches(&self, presented: &str) -> bool {
        match &self.refresh_token {
            Some(stored) => {
                platform::crypto::constant_time_eq(stored.as_bytes(), presented.as_bytes())
            }
            None => false,
        }
    }
}
