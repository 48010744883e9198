mod catalog;
mod config;
mod errors;
mod models;
mod recommend;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::loader::load_catalog;
use crate::config::Config;
use crate::recommend::{Recommender, TfIdfRecommender};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed numeric env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Careers API v{}", env!("CARGO_PKG_VERSION"));

    // Load datasets once; a missing or malformed file aborts startup
    let catalog = Arc::new(load_catalog(&config)?);

    let recommender: Arc<dyn Recommender> = Arc::new(TfIdfRecommender {
        top_k: config.top_k,
    });
    info!(
        "Recommender initialized (backend: {}, top_k: {}, max_skills: {})",
        recommender.backend(),
        config.top_k,
        config.max_skills
    );

    let state = AppState {
        catalog,
        recommender,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
