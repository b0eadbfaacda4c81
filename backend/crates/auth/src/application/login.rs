//! Login Use Case
//!
//! Authenticates a user and issues a refresh token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token;
use crate::domain::entity::user::User;
use crate::domain::repository::{CredentialsRepository, UserRepository};
use crate::domain::value_object::{phone::Phone, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub phone: String,
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    /// The authenticated user
    pub user: User,
    /// Signed refresh token for the cookie
    pub refresh_token: String,
}

/// Login use case
pub struct LoginUseCase<U, C>
where
    U: UserRepository,
    C: CredentialsRepository,
{
    user_repo: Arc<U>,
    credentials_repo: Arc<C>,
    config: Arc<AuthConfig>,
}

impl<U, C> LoginUseCase<U, C>
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

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        if input.phone.trim().is_empty() {
            return Err(AuthError::MissingField("phone"));
        }

        let phone =
            Phone::new(&input.phone).map_err(|e| AuthError::Validation(e.message().to_string()))?;

        // Unknown phone is 404, to match the registration flow's feedback
        let user = self
            .user_repo
            .find_by_phone(&phone)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let mut credentials = self
            .credentials_repo
            .find_by_user_id(&user.user_id)
            .await?
            .ok_or_else(|| AuthError::Internal("Credentials not found".to_string()))?;

        // Verify password
        let raw_password =
            RawPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        if !credentials
            .password_hash
            .verify(&raw_password, self.config.pepper())
        {
            return Err(AuthError::InvalidCredentials);
        }

        // Issue and persist the refresh token
        let refresh_token = token::generate(user.user_id.into_uuid(), &self.config.token_secret);
        credentials.set_refresh_token(refresh_token.clone());
        self.credentials_repo.update(&credentials).await?;

        tracing::info!(
            public_id = %user.public_id,
            "User logged in"
        );

        Ok(LoginOutput {
            user,
            refresh_token,
        })
    }
}
