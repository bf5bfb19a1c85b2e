use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::render::TemplateId;

/// Application configuration loaded from environment variables.
/// Everything is optional; the studio runs fully offline without an API key.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: Option<String>,
    pub output_dir: PathBuf,
    pub template: TemplateId,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let template = match std::env::var("TEMPLATE") {
            Ok(value) => value
                .parse::<TemplateId>()
                .map_err(anyhow::Error::msg)
                .context("TEMPLATE must name a known template")?,
            Err(_) => TemplateId::ModernSidebar,
        };

        Ok(Config {
            anthropic_api_key: std::env::var("ANTHROPIC_API_KEY").ok(),
            output_dir: std::env::var("OUTPUT_DIR")
                .unwrap_or_else(|_| "out".to_string())
                .into(),
            template,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
