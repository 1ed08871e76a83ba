use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use movie_recs_api::{
    api::{create_router, AppState},
    config::Config,
    data::Catalog,
    services::RecommendationEngine,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    let catalog = Catalog::load(&config)?;
    let engine = RecommendationEngine::build(catalog.movies(), config.recommendation_limit);
    let state = AppState::new(catalog, Arc::new(engine), config.min_vote_count);

    let app = create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!(%addr, "Server listening");

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
