pub mod openai;

use async_trait::async_trait;
use std::error::Error as StdError;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::models::chat::ChatMessage;
use self::openai::OpenAIChatClient;

/// Failure of a single completion call. The orchestrator absorbs every
/// variant by substituting the persona's fixed fallback reply.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion request timed out")]
    Timeout,
    #[error("completion request failed: {0}")]
    Http(reqwest::Error),
    #[error("malformed completion response: {0}")]
    MalformedResponse(String),
}

#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, CompletionError>;
}

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

pub fn new_client(
    config: &LlmConfig
) -> Result<Arc<dyn ChatClient>, Box<dyn StdError + Send + Sync>> {
    let client = OpenAIChatClient::from_config(config)?;
    Ok(Arc::new(client))
}
