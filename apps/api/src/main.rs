mod bots;
mod config;
mod corpus;
mod errors;
mod llm_client;
mod questionnaire;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use aws_config::Region;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::corpus::{CorpusIndex, DealNoteSource, DirectorySource, S3Source};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

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

    info!("Starting Analyst API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize S3 / MinIO (pitch decks, optionally deal notes)
    let s3 = build_s3_client(&config).await;
    info!("S3 client initialized");

    // Load the deal-note corpus. An unreachable source aborts startup.
    let source: Box<dyn DealNoteSource> = match &config.deal_notes_s3_bucket {
        Some(bucket) => Box::new(S3Source::new(
            s3.clone(),
            bucket.clone(),
            config.deal_notes_s3_prefix.clone(),
        )),
        None => Box::new(DirectorySource::new(&config.deal_notes_dir)),
    };
    let corpus = CorpusIndex::load(source.as_ref())
        .await
        .context("Failed to load deal notes")?;

    // Initialize LLM client
    let llm = LlmClient::new(config.gemini_api_key.clone(), config.gemini_model.clone())
        .context("Failed to build LLM HTTP client")?;
    info!("LLM client initialized (model: {})", llm.model());

    // Build app state
    let state = AppState::new(corpus, Arc::new(llm), s3);

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the investor dashboard domain is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Constructs an S3 client for AWS or, when `S3_ENDPOINT` is set, MinIO.
/// Credentials come from the standard AWS provider chain.
async fn build_s3_client(config: &Config) -> aws_sdk_s3::Client {
    let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(Region::new(config.aws_region.clone()));
    if let Some(endpoint) = &config.s3_endpoint {
        loader = loader.endpoint_url(endpoint);
    }
    let sdk_config = loader.load().await;

    let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
        .force_path_style(config.s3_endpoint.is_some())
        .build();
    aws_sdk_s3::Client::from_conf(s3_config)
}
