//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::{credentials::Credentials, user::User};
use crate::domain::value_object::{phone::Phone, user_id::UserId};
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Find user by phone number
    async fn find_by_phone(&self, phone: &Phone) -> AuthResult<Option<User>>;

    /// Check if a phone number is already registered
    async fn exists_by_phone(&self, phone: &Phone) -> AuthResult<bool>;
}

/// Credentials repository trait
#[trait_variant::make(CredentialsRepository: Send)]
pub trait LocalCredentialsRepository {
    /// Create credentials for a user
    async fn create(&self, credentials: &Credentials) -> AuthResult<()>;

    /// Find credentials by user ID
    async fn find_by_user_id(&self, user_id: &UserId) -> AuthResult<Option<Credentials>>;

    /// Update credentials (refresh token set/clear)
    async fn update(&self, credentials: &Credentials) -> AuthResult<()>;
}
