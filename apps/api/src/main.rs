mod accounts;
mod ai;
mod auth;
mod billing;
mod config;
mod db;
mod errors;
mod jobs;
mod mailer;
mod models;
mod prefs;
mod routes;
mod state;
mod store;
mod waitlist;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::ai::client::AiClient;
use crate::ai::matcher::{LlmMatchScorer, MatchScorer, OverlapMatchScorer};
use crate::config::Config;
use crate::db::create_pool;
use crate::mailer::Mailer;
use crate::prefs::SqlPreferenceStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.rust_log)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting JobBoard API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let pool = create_pool(&config.database_url).await?;

    // Initialize SMTP mailer
    let mailer = Arc::new(Mailer::from_config(&config)?);
    info!("SMTP mailer initialized ({})", config.smtp_host);

    // Initialize AI provider client
    let ai = AiClient::new(config.anthropic_api_key.clone());
    info!("AI client initialized (model: {})", ai::client::MODEL);

    // Match scorer backend: provider by default, overlap for degraded mode
    let match_scorer: Arc<dyn MatchScorer> = match config.match_scorer_backend.as_str() {
        "overlap" => Arc::new(OverlapMatchScorer),
        _ => Arc::new(LlmMatchScorer(ai.clone())),
    };
    info!("Match scorer backend: {}", config.match_scorer_backend);

    // Preference store (client UI state lives server-side)
    let prefs = Arc::new(SqlPreferenceStore::new(pool.clone()));

    // Build app state
    let state = AppState {
        db: pool,
        ai,
        mailer,
        match_scorer,
        prefs,
        config: config.clone(),
    };

    // Build router
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
