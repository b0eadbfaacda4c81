//! HTTP handlers for auth endpoints

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{ConnectInfo, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use platform::client::extract_client_ip;
use platform::cookie::{CookieConfig, extract_cookie, set_cookie_header};

use kernel::principal::Principal;

use crate::application::{
    AuthConfig, LoginInput, LoginUseCase, LogoutUseCase, RegisterInput, RegisterUseCase,
};
use crate::domain::repository::{CredentialsRepository, UserRepository};
use crate::domain::value_object::user_id::UserId;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    LoginRequest, LoginResponse, LogoutResponse, MeResponse, RegisterRequest, RegisterResponse,
    UserDto,
};

/// Shared state for auth handlers
#[derive(Debug)]
pub struct AuthAppState<R> {
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

impl<R> Clone for AuthAppState<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            config: Arc::clone(&self.config),
        }
    }
}

impl<R> AuthAppState<R> {
    pub fn new(repo: R, config: AuthConfig) -> Self {
        Self {
            repo: Arc::new(repo),
            config: Arc::new(config),
        }
    }

    fn cookie_config(&self, max_age_secs: Option<i64>) -> CookieConfig {
        CookieConfig {
            name: self.config.cookie_name.clone(),
            secure: self.config.cookie_secure,
            same_site: self.config.cookie_same_site,
            max_age_secs,
            ..CookieConfig::default()
        }
    }
}

/// POST /register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<RegisterRequest>,
) -> AuthResult<Response>
where
    R: UserRepository + CredentialsRepository + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(
        Arc::clone(&state.repo),
        Arc::clone(&state.repo),
        Arc::clone(&state.config),
    );
    let user = use_case
        .execute(RegisterInput {
            name: req.name,
            phone: req.phone,
            password: req.password,
            address: req.address,
            city: req.city,
            state: req.state,
        })
        .await?;

    let body = RegisterResponse {
        success: true,
        message: "User registered successfully".to_string(),
        user: UserDto::from(&user),
    };

    Ok((StatusCode::OK, Json(body)).into_response())
}

/// POST /login
///
/// Sets the refresh token cookie on success.
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    Json(req): Json<LoginRequest>,
) -> AuthResult<Response>
where
    R: UserRepository + CredentialsRepository + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(
        Arc::clone(&state.repo),
        Arc::clone(&state.repo),
        Arc::clone(&state.config),
    );
    let output = match use_case
        .execute(LoginInput {
            phone: req.phone,
            password: req.password,
        })
        .await
    {
        Ok(output) => output,
        Err(err) => {
            let ip = extract_client_ip(&headers, Some(addr.ip()));
            tracing::warn!(ip = ?ip, "Login failed");
            return Err(err);
        }
    };

    let cookie_config = state.cookie_config(Some(state.config.token_ttl_secs()));
    let cookie = set_cookie_header(&cookie_config, &output.refresh_token);

    let body = LoginResponse {
        success: true,
        message: "User logged in successfully".to_string(),
        user: UserDto::from(&output.user),
    };

    let mut response = (StatusCode::OK, Json(body)).into_response();
    response.headers_mut().insert(header::SET_COOKIE, cookie);
    Ok(response)
}

/// POST /logout
///
/// Clears the stored refresh token and expires the cookie. Always
/// succeeds from the client's point of view, even when the token is
/// already gone.
pub async fn logout<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<Response>
where
    R: CredentialsRepository + Send + Sync + 'static,
{
    if let Some(token) = bearer_or_cookie(&headers, &state.config.cookie_name) {
        let use_case = LogoutUseCase::new(Arc::clone(&state.repo), Arc::clone(&state.config));
        if let Err(err) = use_case.execute(&token).await {
            tracing::debug!(error = %err, "logout with stale token");
        }
    }

    let delete_cookie = state.cookie_config(None).build_delete_cookie();

    let body = LogoutResponse {
        success: true,
        message: "User logged out successfully".to_string(),
    };

    let mut response = (StatusCode::OK, Json(body)).into_response();
    if let Ok(value) = axum::http::HeaderValue::from_str(&delete_cookie) {
        response.headers_mut().insert(header::SET_COOKIE, value);
    }
    Ok(response)
}

/// GET /me
pub async fn current_user<R>(
    State(state): State<AuthAppState<R>>,
    Extension(principal): Extension<Principal>,
) -> AuthResult<Response>
where
    R: UserRepository + Send + Sync + 'static,
{
    let user = state
        .repo
        .find_by_id(&UserId::from_uuid(principal.user_id))
        .await?
        .ok_or(AuthError::UserNotFound)?;

    let body = MeResponse {
        success: true,
        user: UserDto::from(&user),
    };

    Ok((StatusCode::OK, Json(body)).into_response())
}

/// Reads the session token from the Authorization header, falling back
/// to the refresh token cookie.
pub(crate) fn bearer_or_cookie(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    if let Some(value) = headers.get(header::AUTHORIZATION) {
        if let Ok(value) = value.to_str() {
            if let Some(token) = value.strip_prefix("Bearer ") {
                let token = token.trim();
                if !token.is_empty() {
                    return Some(token.to_string());
                }
            }
        }
    }
    extract_cookie(headers, cookie_name)
}
