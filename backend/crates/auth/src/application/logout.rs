//! Logout Use Case
//!
//! Revokes a user's refresh token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token;
use crate::domain::repository::CredentialsRepository;
use crate::domain::value_object::user_id::UserId;
use crate::error::{AuthError, AuthResult};

/// Logout use case
pub struct LogoutUseCase<C>
where
    C: CredentialsRepository,
{
    credentials_repo: Arc<C>,
    config: Arc<AuthConfig>,
}

impl<C> LogoutUseCase<C>
where
    C: CredentialsRepository,
{
    pub fn new(credentials_repo: Arc<C>, config: Arc<AuthConfig>) -> Self {
        Self {
            credentials_repo,
            config,
        }
    }

    /// Clear the stored refresh token. Idempotent: logging out while
    /// already logged out succeeds.
    pub async fn execute(&self, refresh_token: &str) -> AuthResult<()> {
        let user_id = token::verify(refresh_token, &self.config.token_secret)?;
        let user_id = UserId::from_uuid(user_id);

        let Some(mut credentials) = self.credentials_repo.find_by_user_id(&user_id).await? else {
            return Err(AuthError::TokenInvalid);
        };

        credentials.clear_refresh_token();
        self.credentials_repo.update(&credentials).await?;

        tracing::info!(user_id = %user_id, "User logged out");
        Ok(())
    }
}
