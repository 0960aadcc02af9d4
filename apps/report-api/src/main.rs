mod analysis;
mod config;
mod db;
mod errors;
mod llm_client;
mod models;
mod report;
mod routes;
mod service;
mod state;
mod store;
mod text;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::{CompletionModel, LlmClient};
use crate::routes::build_router;
use crate::service::ReportService;
use crate::state::AppState;
use crate::store::PgFeedbackStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Report API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;
    let store = Arc::new(PgFeedbackStore::new(db));

    let llm_timeout = Duration::from_secs(config.llm_timeout_secs);
    let model: Option<Arc<dyn CompletionModel>> = match &config.anthropic_api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone(), llm_timeout)?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(Arc::new(llm) as Arc<dyn CompletionModel>)
        }
        None => {
            warn!("ANTHROPIC_API_KEY is not set; reports will use the rule-based path");
            None
        }
    };
    info!("AI report path enabled: {}", config.ai_enabled());

    let state = AppState {
        reports: ReportService::new(store, model, llm_timeout),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins to the placement portal domain

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
