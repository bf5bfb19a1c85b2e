//! AI text assist — the single point of entry for all text-model calls.
//!
//! No other module may talk to the completion API directly. Both operations
//! degrade to a safe value on any failure: the editing experience never
//! blocks or corrupts state because the external service misbehaved. There
//! is no retry — one failed attempt is terminal until the user asks again.

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// Hardcoded to prevent accidental drift between assist features.
pub const MODEL: &str = "claude-sonnet-4-5";
const MAX_TOKENS: u32 = 1024;

/// Returned when bullet generation fails outright.
pub const BULLET_FALLBACK_FAILURE: &str = "Responsible for daily tasks and team collaboration.";
/// Returned when the model answers with empty content.
pub const BULLET_FALLBACK_EMPTY: &str = "Managed projects and led team initiatives successfully.";

#[derive(Debug, Error)]
pub enum AssistError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("model returned empty content")]
    EmptyContent,
}

/// The external text-completion collaborator. Production uses
/// [`AssistClient`]; tests substitute stubs.
#[async_trait]
pub trait TextModel: Send + Sync {
    async fn complete(&self, prompt: &str, system: &str) -> Result<String, AssistError>;
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<CompletionMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct CompletionMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    content: Vec<ContentBlock>,
    usage: Usage,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    input_tokens: u32,
    output_tokens: u32,
}

impl CompletionResponse {
    fn text(&self) -> Option<&str> {
        self.content
            .iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Messages-API client used by every assist feature.
#[derive(Clone)]
pub struct AssistClient {
    client: Client,
    api_key: String,
}

impl AssistClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }
}

#[async_trait]
impl TextModel for AssistClient {
    async fn complete(&self, prompt: &str, system: &str) -> Result<String, AssistError> {
        let request_body = CompletionRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            system,
            messages: vec![CompletionMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(AssistError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: CompletionResponse = response
            .json()
            .await
            .map_err(AssistError::Http)?;

        debug!(
            "assist call succeeded: input_tokens={}, output_tokens={}",
            completion.usage.input_tokens, completion.usage.output_tokens
        );

        completion
            .text()
            .map(|t| t.to_string())
            .ok_or(AssistError::EmptyContent)
    }
}

/// Rewrites `text` to be tighter and more professional.
///
/// Empty/whitespace input returns unchanged without invoking the model.
/// Any failure, or an empty completion, falls back to the original text.
pub async fn enhance(model: &dyn TextModel, text: &str, context: &str) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }
    match model
        .complete(&prompts::enhance_prompt(text, context), prompts::SYSTEM)
        .await
    {
        Ok(improved) if !improved.trim().is_empty() => improved.trim().to_string(),
        Ok(_) => text.to_string(),
        Err(e) => {
            warn!("text enhance failed, keeping original: {e}");
            text.to_string()
        }
    }
}

/// Generates one high-impact bullet for a role at a company.
///
/// Never returns an empty string: a failed call yields a fixed generic
/// sentence, an empty completion a slightly different one.
pub async fn generate_bullet(model: &dyn TextModel, role: &str, company: &str) -> String {
    match model
        .complete(&prompts::bullet_prompt(role, company), prompts::SYSTEM)
        .await
    {
        Ok(bullet) if !bullet.trim().is_empty() => bullet.trim().to_string(),
        Ok(_) => BULLET_FALLBACK_EMPTY.to_string(),
        Err(e) => {
            warn!("bullet generation failed, using fallback: {e}");
            BULLET_FALLBACK_FAILURE.to_string()
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts calls and answers from a canned script.
    pub struct StubModel {
        pub calls: AtomicUsize,
        pub reply: Result<String, ()>,
    }

    impl StubModel {
        pub fn replying(text: &str) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                reply: Ok(text.to_string()),
            }
        }

        pub fn failing() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                reply: Err(()),
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TextModel for StubModel {
        async fn complete(&self, _prompt: &str, _system: &str) -> Result<String, AssistError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(()) => Err(AssistError::EmptyContent),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::StubModel;
    use super::*;

    #[tokio::test]
    async fn test_enhance_empty_input_skips_model_entirely() {
        let model = StubModel::replying("should never be seen");
        assert_eq!(enhance(&model, "", "quote").await, "");
        assert_eq!(enhance(&model, "   ", "quote").await, "   ");
        assert_eq!(model.call_count(), 0, "no external call on empty input");
    }

    #[tokio::test]
    async fn test_enhance_returns_trimmed_completion() {
        let model = StubModel::replying("  Crafted inclusive design systems.  ");
        let out = enhance(&model, "I make designs", "personal quote").await;
        assert_eq!(out, "Crafted inclusive design systems.");
        assert_eq!(model.call_count(), 1);
    }

    #[tokio::test]
    async fn test_enhance_falls_back_to_original_on_failure() {
        let model = StubModel::failing();
        let out = enhance(&model, "I make designs", "personal quote").await;
        assert_eq!(out, "I make designs");
    }

    #[tokio::test]
    async fn test_enhance_falls_back_on_blank_completion() {
        let model = StubModel::replying("   ");
        let out = enhance(&model, "I make designs", "personal quote").await;
        assert_eq!(out, "I make designs");
    }

    #[tokio::test]
    async fn test_bullet_failure_yields_fixed_sentence() {
        let model = StubModel::failing();
        let out = generate_bullet(&model, "VR designer", "Meta").await;
        assert_eq!(out, BULLET_FALLBACK_FAILURE);
        assert!(!out.is_empty(), "UI must never show a blank field");
    }

    #[tokio::test]
    async fn test_bullet_blank_completion_yields_generic_sentence() {
        let model = StubModel::replying("");
        let out = generate_bullet(&model, "VR designer", "Meta").await;
        assert_eq!(out, BULLET_FALLBACK_EMPTY);
    }

    #[tokio::test]
    async fn test_bullet_success_is_trimmed() {
        let model = StubModel::replying("\nShipped spatial UI adopted by 3 headset lines.\n");
        let out = generate_bullet(&model, "VR designer", "Meta").await;
        assert_eq!(out, "Shipped spatial UI adopted by 3 headset lines.");
    }
}
