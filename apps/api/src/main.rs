use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use resume_reviewer::config::Config;
use resume_reviewer::llm_client::LlmClient;
use resume_reviewer::logging::init_tracing;
use resume_reviewer::routes::build_router;
use resume_reviewer::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on a missing ANTHROPIC_API_KEY)
    let config = Config::from_env()?;

    // Initialize structured logging
    init_tracing(&config.rust_log);

    info!("Starting Resume Reviewer v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = LlmClient::from_config(&config).context("Error connecting to Anthropic")?;
    info!(
        "LLM client initialized (model: {}, max_tokens: {})",
        llm.settings().model,
        llm.settings().max_tokens
    );

    let state = AppState {
        reviewer: Arc::new(llm),
        max_upload_bytes: config.max_upload_bytes,
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
