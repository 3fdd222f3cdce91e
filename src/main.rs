//! Campus Server - REST API for a university course catalog
//!
//! Exposes course CRUD endpoints, student account registration/login with
//! token-based sessions, and two token-gated demonstration routes.

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use campus_server::{
    create_router, AppState, Config, CourseRepository, StudentRepository, TokenKeys,
};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("campus_server=info,tower_http=info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            std::process::exit(1);
        }
    };

    // One shared pool for the process lifetime; failure to connect is fatal
    let pool = match PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .min_connections(config.database_min_connections)
        .connect(&config.database_url)
        .await
    {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!(error = %e, "Failed to connect to database");
            std::process::exit(1);
        }
    };

    let state = AppState {
        courses: CourseRepository::new(pool.clone()),
        students: StudentRepository::new(pool),
        token_keys: Arc::new(TokenKeys::from_secret(&config.token_secret)),
    };

    let app = create_router(state);
    let addr = config.socket_addr();

    tracing::info!(%addr, "Starting campus-server");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, %addr, "Failed to bind");
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}
