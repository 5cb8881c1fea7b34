use anyhow::{bail, Context, Result};

use crate::llm_client::prompts::REVIEW_INSTRUCTION;

pub const DEFAULT_API_URL: &str = "https://api.anthropic.com/v1/messages";
pub const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20241022";
pub const DEFAULT_MAX_TOKENS: u32 = 1024;

/// Application configuration loaded from environment variables.
/// Fails at startup if the API credential is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    pub anthropic_api_url: String,
    pub analysis: AnalysisSettings,
    pub port: u16,
    /// Upload body cap in bytes, from `MAX_UPLOAD_MB`.
    pub max_upload_bytes: usize,
    pub rust_log: String,
}

/// The fixed parameters of every review call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisSettings {
    /// Model identifier sent as `model`. Default: `claude-3-5-sonnet-20241022`.
    pub model: String,
    /// Upper bound on generated tokens. Default: 1024.
    pub max_tokens: u32,
    /// Instruction sent after the document block. Default: [`REVIEW_INSTRUCTION`].
    pub instruction: String,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            instruction: REVIEW_INSTRUCTION.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves the configuration against an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let anthropic_api_key = require(&lookup, "ANTHROPIC_API_KEY")?;

        let mut analysis = AnalysisSettings::default();
        if let Some(model) = lookup("ANTHROPIC_MODEL") {
            analysis.model = model;
        }
        if let Some(max_tokens) = lookup("MAX_TOKENS") {
            analysis.max_tokens = max_tokens
                .parse::<u32>()
                .context("MAX_TOKENS must be a positive integer")?;
            if analysis.max_tokens == 0 {
                bail!("MAX_TOKENS must be a positive integer, got 0");
            }
        }

        let max_upload_mb = lookup("MAX_UPLOAD_MB")
            .unwrap_or_else(|| "32".to_string())
            .parse::<usize>()
            .context("MAX_UPLOAD_MB must be a whole number of megabytes")?;
        let max_upload_bytes = max_upload_mb
            .checked_mul(1024 * 1024)
            .with_context(|| format!("MAX_UPLOAD_MB={max_upload_mb} is too large"))?;

        Ok(Config {
            anthropic_api_key,
            anthropic_api_url: lookup("ANTHROPIC_API_URL")
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            analysis,
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            max_upload_bytes,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn require<F>(lookup: &F, key: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|value| !value.trim().is_empty())
        .with_context(|| {
            format!("Required environment variable '{key}' is not set. Add it to the environment or the .env file")
        })
}
