//! Use-case tests over an in-memory repository

use std::sync::{Arc, Mutex};

use crate::application::{
    AuthConfig, CurrentUserUseCase, LoginInput, LoginUseCase, LogoutUseCase, RegisterInput,
    RegisterUseCase,
};
use crate::domain::entity::{credentials::Credentials, user::User};
use crate::domain::repository::{CredentialsRepository, UserRepository};
use crate::domain::value_object::{phone::Phone, user_id::UserId};
use crate::error::{AuthError, AuthResult};

// ============================================================================
// Test double
// ============================================================================

#[derive(Default)]
struct InMemoryAuthRepo {
    users: Mutex<Vec<User>>,
    credentials: Mutex<Vec<Credentials>>,
}

impl UserRepository for InMemoryAuthRepo {
    async fn create(&self, user: &User) -> AuthResult<()> {
        self.users.lock().unwrap().push(user.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| &u.user_id == user_id)
            .cloned())
    }

    async fn find_by_phone(&self, phone: &Phone) -> AuthResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.phone.as_str() == phone.as_str())
            .cloned())
    }

    async fn exists_by_phone(&self, phone: &Phone) -> AuthResult<bool> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .any(|u| u.phone.as_str() == phone.as_str()))
    }
}

impl CredentialsRepository for InMemoryAuthRepo {
    async fn create(&self, credentials: &Credentials) -> AuthResult<()> {
        self.credentials.lock().unwrap().push(credentials.clone());
        Ok(())
    }

    async fn find_by_user_id(&self, user_id: &UserId) -> AuthResult<Option<Credentials>> {
        Ok(self
            .credentials
            .lock()
            .unwrap()
            .iter()
            .find(|c| &c.user_id == user_id)
            .cloned())
    }

    async fn update(&self, credentials: &Credentials) -> AuthResult<()> {
        let mut stored = self.credentials.lock().unwrap();
        if let Some(slot) = stored.iter_mut().find(|c| c.user_id == credentials.user_id) {
            *slot = credentials.clone();
        }
        Ok(())
    }
}

fn sample_register() -> RegisterInput {
    RegisterInput {
        name: "Asha Kumari".into(),
        phone: "+91 98765 43210".into(),
        password: "Adequate#Pass9".into(),
        address: "12 MG Road".into(),
        city: "Pune".into(),
        state: "Maharashtra".into(),
    }
}

fn harness() -> (Arc<InMemoryAuthRepo>, Arc<AuthConfig>) {
    (
        Arc::new(InMemoryAuthRepo::default()),
        Arc::new(AuthConfig::with_random_secret()),
    )
}

async fn register(repo: &Arc<InMemoryAuthRepo>, config: &Arc<AuthConfig>) -> User {
    RegisterUseCase::new(Arc::clone(repo), Arc::clone(repo), Arc::clone(config))
        .execute(sample_register())
        .await
        .unwrap()
}

async fn login(repo: &Arc<InMemoryAuthRepo>, config: &Arc<AuthConfig>) -> String {
    LoginUseCase::new(Arc::clone(repo), Arc::clone(repo), Arc::clone(config))
        .execute(LoginInput {
            phone: "+91 98765 43210".into(),
            password: "Adequate#Pass9".into(),
        })
        .await
        .unwrap()
        .refresh_token
}

// ============================================================================
// Registration
// ============================================================================

#[cfg(test)]
mod register_tests {
    use super::*;

    #[tokio::test]
    async fn test_register_creates_user_and_credentials() {
        let (repo, config) = harness();
        let user = register(&repo, &config).await;

        assert_eq!(user.name, "Asha Kumari");
        // Phone is normalized on the way in
        assert_eq!(user.phone.as_str(), "+919876543210");
        assert_eq!(repo.users.lock().unwrap().len(), 1);
        assert_eq!(repo.credentials.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_phone_conflicts() {
        let (repo, config) = harness();
        register(&repo, &config).await;

        let err = RegisterUseCase::new(Arc::clone(&repo), Arc::clone(&repo), config)
            .execute(sample_register())
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::PhoneTaken));
        assert_eq!(repo.users.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_blank_field_rejected() {
        let (repo, config) = harness();

        let mut input = sample_register();
        input.city = "   ".into();

        let err = RegisterUseCase::new(Arc::clone(&repo), Arc::clone(&repo), config)
            .execute(input)
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::MissingField("city")));
    }

    #[tokio::test]
    async fn test_short_password_rejected() {
        let (repo, config) = harness();

        let mut input = sample_register();
        input.password = "short".into();

        let err = RegisterUseCase::new(Arc::clone(&repo), Arc::clone(&repo), config)
            .execute(input)
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::PasswordValidation(_)));
    }
}

// ============================================================================
// Sessions
// ============================================================================

#[cfg(test)]
mod session_tests {
    use super::*;

    #[tokio::test]
    async fn test_login_issues_verifiable_token() {
        let (repo, config) = harness();
        let user = register(&repo, &config).await;
        let token = login(&repo, &config).await;

        let current = CurrentUserUseCase::new(Arc::clone(&repo), Arc::clone(&repo), config)
            .execute(&token)
            .await
            .unwrap();

        assert_eq!(current.user_id, user.user_id);
    }

    #[tokio::test]
    async fn test_login_wrong_password_unauthorized() {
        let (repo, config) = harness();
        register(&repo, &config).await;

        let err = LoginUseCase::new(Arc::clone(&repo), Arc::clone(&repo), config)
            .execute(LoginInput {
                phone: "+91 98765 43210".into(),
                password: "Wrong#Pass999".into(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_unknown_phone_not_found() {
        let (repo, config) = harness();

        let err = LoginUseCase::new(Arc::clone(&repo), Arc::clone(&repo), config)
            .execute(LoginInput {
                phone: "+15551234567".into(),
                password: "Adequate#Pass9".into(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::UserNotFound));
    }

    #[tokio::test]
    async fn test_login_missing_phone_is_bad_request() {
        let (repo, config) = harness();

        let err = LoginUseCase::new(Arc::clone(&repo), Arc::clone(&repo), config)
            .execute(LoginInput {
                phone: "  ".into(),
                password: "Adequate#Pass9".into(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::MissingField("phone")));
    }

    #[tokio::test]
    async fn test_logout_revokes_outstanding_token() {
        let (repo, config) = harness();
        register(&repo, &config).await;
        let token = login(&repo, &config).await;

        LogoutUseCase::new(Arc::clone(&repo), Arc::clone(&config))
            .execute(&token)
            .await
            .unwrap();

        // The signature still checks out, but the stored token is gone
        let err = CurrentUserUseCase::new(Arc::clone(&repo), Arc::clone(&repo), config)
            .execute(&token)
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::TokenInvalid));
    }

    #[tokio::test]
    async fn test_forged_token_rejected_without_repo_state() {
        let (repo, config) = harness();

        let err = CurrentUserUseCase::new(Arc::clone(&repo), Arc::clone(&repo), config)
            .execute("aaaaaaaa-aaaa-aaaa-aaaa-aaaaaaaaaaaa.bm90LWEtc2ln")
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::TokenInvalid));
    }

    #[tokio::test]
    async fn test_relogin_replaces_previous_token() {
        let (repo, config) = harness();
        register(&repo, &config).await;
        let first = login(&repo, &config).await;
        let second = login(&repo, &config).await;

        // Tokens are deterministic per user, so both still verify; the
        // stored value is whatever the latest login set
        assert_eq!(first, second);
        let current = CurrentUserUseCase::new(Arc::clone(&repo), Arc::clone(&repo), config)
            .execute(&second)
            .await;
        assert!(current.is_ok());
    }
}
