//! Mood-based watch recommendations.
//!
//! Hosts the UI session state for a single-page client: the client fills in how it
//! feels, the service asks a remote recommender for titles (falling back to a fixed
//! list when that fails) and the client narrows the list by category.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
pub mod session;

use api::{create_router, AppState};
use config::Config;

/// Builds the live providers from `config` and serves until the process is stopped
pub async fn run(config: Config) -> anyhow::Result<()> {
    let state = AppState::from_config(&config)?;
    state.start_idle_sweep(config.session_idle());
    let app = create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(
        address = %addr,
        recommend_api = %config.recommend_api_url,
        session_idle_secs = config.session_idle_secs,
        "Server listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
