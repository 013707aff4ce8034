mod applications;
mod auth;
mod config;
mod db;
mod errors;
mod jobs;
mod models;
mod routes;
mod state;
mod store;
mod supervisor;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::postgres::PgStore;
use crate::supervisor::{supervise_store, SupervisorSettings};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_PKG_NAME"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting job board API v{}", env!("CARGO_PKG_VERSION"));

    // PostgreSQL, connected in the background by the supervisor
    let pool = create_pool(&config.database_url)?;
    let state = AppState::new(config.clone(), Arc::new(PgStore::new(pool)));

    tokio::spawn(supervise_store(
        state.store.clone(),
        state.readiness.clone(),
        SupervisorSettings {
            retry_delay: Duration::from_secs(config.store_retry_secs),
            seed_jobs: config.seed_jobs,
        },
    ));

    if let Some(dir) = &config.static_dir {
        info!("Serving front end from {}", dir.display());
    }

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
