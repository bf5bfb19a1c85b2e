use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use studio::analytics::TracingSink;
use studio::assist::{self, AssistClient};
use studio::config::Config;
use studio::models::seed::seed_document;
use studio::render::{self, TemplateId};
use studio::store::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Studio v{}", env!("CARGO_PKG_VERSION"));

    let sink = Arc::new(TracingSink);
    let mut state = AppState::new(seed_document(), sink);
    state.select_template(config.template);
    info!("Editing resume for {}", state.document.personal.full_name);

    // The studio is fully usable without a key; assist is simply offline.
    match config.anthropic_api_key.as_deref() {
        Some(key) => {
            let client = AssistClient::new(key.to_string());
            info!("Assist client initialized (model: {})", assist::MODEL);
            if state.enhance_quote(&client).await.is_ok() {
                info!("Quote enhanced: {}", state.document.personal.quote);
            }
        }
        None => warn!("ANTHROPIC_API_KEY not set; text assist disabled"),
    }

    // Write every template's projection of the document for side-by-side review.
    std::fs::create_dir_all(&config.output_dir)?;
    for id in TemplateId::ALL {
        let page = render::render_page(&state.document, id, state.theme, 1.0);
        let path = config.output_dir.join(format!("{id}.html"));
        std::fs::write(&path, &page.html)?;
        info!("Wrote {} ({} bytes)", path.display(), page.html.len());
    }

    Ok(())
}
