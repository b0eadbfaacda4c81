//! Auth router assembly

use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::application::AuthConfig;
use crate::domain::repository::{CredentialsRepository, UserRepository};
use crate::infra::postgres::PgAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{AuthMiddlewareState, require_auth};

/// Build the auth router backed by Postgres.
pub fn auth_router(repo: PgAuthRepository, config: AuthConfig) -> Router {
    auth_router_generic(repo, config)
}

/// Build the auth router over any repository implementation.
///
/// `/register`, `/login` and `/logout` are public; `/me` requires a
/// valid session token.
pub fn auth_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: UserRepository + CredentialsRepository + Send + Sync + 'static,
{
    let state = AuthAppState::new(repo, config);
    let mw_state = AuthMiddlewareState::new(Arc::clone(&state.repo), Arc::clone(&state.config));

    let protected = Router::new()
        .route("/me", get(handlers::current_user::<R>))
        .route_layer(middleware::from_fn_with_state(mw_state, require_auth::<R>));

    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .route("/logout", post(handlers::logout::<R>))
        .merge(protected)
        .with_state(state)
}
