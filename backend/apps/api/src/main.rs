//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use auth::middleware::{AuthMiddlewareState, require_auth};
use auth::{AuthConfig, PgAuthRepository, auth_router};
use axum::{
    Router, http,
    http::{Method, header},
    middleware,
};
use base64::Engine;
use base64::engine::general_purpose;
use reports::{HttpChainGateway, PgReportsRepository, ReportsConfig, reports_router};
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,reports=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Auth configuration
    let auth_config = if cfg!(debug_assertions) {
        AuthConfig::development()
    } else {
        // In production, load secret from environment
        let secret_b64 =
            env::var("AUTH_TOKEN_SECRET").expect("AUTH_TOKEN_SECRET must be set in production");
        let secret_bytes = Engine::decode(&general_purpose::STANDARD, &secret_b64)?;
        let mut secret = [0u8; 32];
        secret.copy_from_slice(&secret_bytes);
        AuthConfig {
            token_secret: secret,
            password_pepper: env::var("PASSWORD_PEPPER").ok().map(String::into_bytes),
            ..AuthConfig::default()
        }
    };

    // Blockchain gateway configuration
    let reports_config = match env::var("CHAIN_GATEWAY_URL") {
        Ok(url) => ReportsConfig {
            gateway_base_url: url,
            ..ReportsConfig::default()
        },
        Err(_) => ReportsConfig::default(),
    };

    let gateway = HttpChainGateway::new(
        reports_config.gateway_base_url.clone(),
        reports_config.gateway_timeout,
    )?;

    tracing::info!(gateway = %reports_config.gateway_base_url, "Blockchain gateway configured");

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // The reports router sits entirely behind the auth middleware
    let auth_repo = PgAuthRepository::new(pool.clone());
    let auth_mw_state = AuthMiddlewareState::new(
        Arc::new(auth_repo.clone()),
        Arc::new(auth_config.clone()),
    );

    let report_routes = reports_router(PgReportsRepository::new(pool.clone()), gateway)
        .route_layer(middleware::from_fn_with_state(
            auth_mw_state,
            require_auth::<PgAuthRepository>,
        ));

    // Build router
    let app = Router::new()
        .nest("/api/auth", auth_router(auth_repo, auth_config))
        .nest("/api/reports", report_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(4000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
