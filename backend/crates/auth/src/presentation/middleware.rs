//! Authentication middleware
//!
//! Verifies the refresh token on protected routes and injects the
//! resolved [`Principal`] into request extensions.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use kernel::principal::Principal;

use crate::application::{AuthConfig, CurrentUserUseCase};
use crate::domain::repository::{CredentialsRepository, UserRepository};
use crate::error::AuthError;
use crate::presentation::handlers::bearer_or_cookie;

/// State for the auth middleware
#[derive(Debug)]
pub struct AuthMiddlewareState<R> {
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

impl<R> Clone for AuthMiddlewareState<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            config: Arc::clone(&self.config),
        }
    }
}

impl<R> AuthMiddlewareState<R> {
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }
}

/// Require a valid session token.
///
/// Responds 401 when the token is missing, forged, or revoked.
pub async fn require_auth<R>(
    State(state): State<AuthMiddlewareState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: UserRepository + CredentialsRepository + Send + Sync + 'static,
{
    let token = bearer_or_cookie(req.headers(), &state.config.cookie_name)
        .ok_or_else(|| AuthError::TokenInvalid.into_response())?;

    let use_case = CurrentUserUseCase::new(
        Arc::clone(&state.repo),
        Arc::clone(&state.repo),
        Arc::clone(&state.config),
    );

    let user = use_case
        .execute(&token)
        .await
        .map_err(|err| err.into_response())?;

    let principal = Principal::new(*user.user_id.as_uuid(), user.public_id.to_string());
    req.extensions_mut().insert(principal);

    Ok(next.run(req).await)
}
