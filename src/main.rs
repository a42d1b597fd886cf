use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod quiz;

use crate::api::{build_app, AppState};
use crate::config::Config;
use crate::quiz::{QuestionProvider, QuestionStore};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;

    let store = QuestionStore::open(&config.question_file, config.rng())
        .context("Could not load questions")?;
    let store = Arc::new(store);
    let provider = QuestionProvider::new(store.clone(), config.rng());
    let app = build_app(AppState::new(store, provider));

    let listener = tokio::net::TcpListener::bind(config.bind_address)
        .await
        .with_context(|| format!("Could not bind to {}", config.bind_address))?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
