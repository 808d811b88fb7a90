/// LLM clients — the single point of entry for chat-completion API calls.
///
/// ARCHITECTURAL RULE: no other module may call a provider API directly.
/// All upstream chat interactions MUST go through this module.
pub mod claude;
pub mod openai;

use std::pin::Pin;

use async_trait::async_trait;
use futures::Stream;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("stream error: {0}")]
    Stream(String),

    #[error("provider returned empty content")]
    EmptyContent,
}

/// One turn of a conversation, in the `{role, content}` shape both providers
/// accept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Text fragments forwarded from an upstream token stream. Dropping the
/// stream drops the underlying HTTP response, aborting the provider request.
pub type TextStream = Pin<Box<dyn Stream<Item = Result<String, LlmError>> + Send>>;

/// Common surface of the two chat-completion providers, so the assistant
/// handler is written once and parameterized by provider.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Sends the conversation and returns the full completion text.
    async fn complete(&self, system: &str, messages: &[ChatMessage]) -> Result<String, LlmError>;

    /// Sends the conversation and returns a stream of text fragments.
    async fn stream(&self, system: &str, messages: &[ChatMessage]) -> Result<TextStream, LlmError>;
}
