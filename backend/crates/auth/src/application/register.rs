//! Register Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::{credentials::Credentials, user::User};
use crate::domain::repository::{CredentialsRepository, UserRepository};
use crate::domain::value_object::{
    phone::Phone,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub name: String,
    pub phone: String,
    pub password: String,
    pub address: String,
    pub city: String,
    pub state: String,
}

/// Register use case
pub struct RegisterUseCase<U, C>
where
    U: UserRepository,
    C: CredentialsRepository,
{
    user_repo: Arc<U>,
    credentials_repo: Arc<C>,
    config: Arc<AuthConfig>,
}

impl<U, C> RegisterUseCase<U, C>
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

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<User> {
        // Every text field is required and trimmed
        let name = required_field("name", &input.name)?;
        let address = required_field("address", &input.address)?;
        let city = required_field("city", &input.city)?;
        let state = required_field("state", &input.state)?;

        let phone =
            Phone::new(&input.phone).map_err(|e| AuthError::Validation(e.message().to_string()))?;

        // Reject duplicate phone numbers
        if self.user_repo.exists_by_phone(&phone).await? {
            return Err(AuthError::PhoneTaken);
        }

        // Validate and hash password
        let raw_password = RawPassword::new(input.password)
            .map_err(|e| AuthError::PasswordValidation(e.message().to_string()))?;
        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let user = User::new(name, phone, address, city, state);
        let credentials = Credentials::new(user.user_id, password_hash);

        self.user_repo.create(&user).await?;
        self.credentials_repo.create(&credentials).await?;

        tracing::info!(
            public_id = %user.public_id,
            "User registered"
        );

        Ok(user)
    }
}

fn required_field(name: &'static str, value: &str) -> AuthResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AuthError::MissingField(name));
    }
    Ok(trimmed.to_string())
}
