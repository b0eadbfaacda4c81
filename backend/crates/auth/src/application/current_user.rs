//! Current User Use Case
//!
//! Resolves the authenticated user from a presented refresh token.
//! Used by the auth middleware and the `/me` handler.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token;
use crate::domain::entity::user::User;
use crate::domain::repository::{CredentialsRepository, UserRepository};
use crate::domain::value_object::user_id::UserId;
use crate::error::{AuthError, AuthResult};

/// Current user use case
pub struct CurrentUserUseCase<U, C>
where
    U: UserRepository,
    C: CredentialsRepository,
{
    user_repo: Arc<U>,
    credentials_repo: Arc<C>,
    config: Arc<AuthConfig>,
}

impl<U, C> CurrentUserUseCase<U, C>
where
    U: UserRepository,
    C: CredentialsRepository,
{
    pub fn new(user_repo: Arc<U>, credentials_repo: Arc<C>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            credentials_repo,
            config,
        }
    }

    /// Authenticate a refresh token and load the user.
    ///
    /// The signature check happens before any database access; the
    /// stored-token comparison makes revoked (logged-out) cookies fail.
    pub async fn execute(&self, refresh_token: &str) -> AuthResult<User> {
        let user_id = token::verify(refresh_token, &self.config.token_secret)?;
        let user_id = UserId::from_uuid(user_id);

        let credentials = self
            .credentials_repo
            .find_by_user_id(&user_id)
            .await?
            .ok_or(AuthError::TokenInvalid)?;

        if !credentials.refresh_token_matches(refresh_token) {
            return Err(AuthError::TokenInvalid);
        }

        self.user_repo
            .find_by_id(&user_id)
            .await?
            .ok_or(AuthError::TokenInvalid)
    }
}
