//! Users API - Application Entry Point

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use users_api::{
    config::{StoreBackend, CONFIG},
    db, handlers,
    services::{InMemoryUserService, PgUserService, UserService},
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| CONFIG.server.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Users API server...");

    let service: Arc<dyn UserService> = match CONFIG.store.backend {
        StoreBackend::Postgres => {
            let database = CONFIG
                .store
                .database
                .as_ref()
                .context("Postgres store selected without database configuration")?;

            tracing::info!("Connecting to database...");
            let pool = db::create_pool(database).await?;
            db::test_connection(&pool).await?;

            tracing::info!("Running database migrations...");
            db::run_migrations(&pool).await?;

            Arc::new(PgUserService::new(pool))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory user store; data is lost on shutdown");
            Arc::new(InMemoryUserService::new())
        }
    };

    let state = AppState::with_service(service, CONFIG.clone());
    let app = handlers::app(state);

    // Start the server
    let addr = SocketAddr::new(CONFIG.server.host.parse()?, CONFIG.server.port);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
