use anyhow::{Context, Result};

use crate::llm_client::DEFAULT_MODEL;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub deal_notes_dir: String,
    /// When set, deal notes are loaded from this bucket instead of `deal_notes_dir`.
    pub deal_notes_s3_bucket: Option<String>,
    pub deal_notes_s3_prefix: String,
    pub s3_endpoint: Option<String>,
    pub aws_region: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            gemini_model: env_or("GEMINI_MODEL", DEFAULT_MODEL),
            deal_notes_dir: env_or("DEAL_NOTES_DIR", "notes"),
            deal_notes_s3_bucket: optional_env("DEAL_NOTES_S3_BUCKET"),
            deal_notes_s3_prefix: env_or("DEAL_NOTES_S3_PREFIX", "deal-notes/"),
            s3_endpoint: optional_env("S3_ENDPOINT"),
            aws_region: env_or("AWS_REGION", "us-east-1"),
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_or(key: &str, default: &str) -> String {
    optional_env(key).unwrap_or_else(|| default.to_string())
}
