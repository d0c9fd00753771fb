use async_trait::async_trait;
use rig::client::CompletionClient;
use rig::completion::Chat;
use rig::providers::openai;
use tracing::error;

use crate::config::Settings;
use crate::errors::AppError;

const MAX_TOKENS: u64 = 512;
const TEMPERATURE: f64 = 0.6;

/// A single-turn completion: system prompt in, assistant text out.
#[async_trait]
pub trait ChatAgent: Send + Sync {
    async fn reply(&self, system_prompt: &str, user_message: &str) -> Result<String, AppError>;
}

/// Talks to OpenRouter through rig's OpenAI-compatible chat-completions
/// client. A fresh agent is built per request because the preamble carries
/// the whole résumé.
#[derive(Clone)]
pub struct OpenRouterAgent {
    client: openai::CompletionsClient,
    model: String,
}

impl OpenRouterAgent {
    pub fn new(settings: &Settings) -> Result<Self, AppError> {
        let client = openai::CompletionsClient::builder()
            .api_key(&settings.openrouter_api_key)
            .base_url(&settings.openrouter_base_url)
            .build()
            .map_err(|e| AppError::Config {
                message: format!("failed to create OpenRouter client: {e}"),
            })?;
        Ok(Self {
            client,
            model: settings.openrouter_model.clone(),
        })
    }
}

#[async_trait]
impl ChatAgent for OpenRouterAgent {
    async fn reply(&self, system_prompt: &str, user_message: &str) -> Result<String, AppError> {
        let agent = self
            .client
            .agent(&self.model)
            .preamble(system_prompt)
            .max_tokens(MAX_TOKENS)
            .temperature(TEMPERATURE)
            .build();

        let content = agent.chat(user_message, Vec::new()).await.map_err(|e| {
            error!("OpenRouter completion failed for model {}: {e}", self.model);
            AppError::InferenceError {
                message: e.to_string(),
            }
        })?;

        Ok(content.trim().to_string())
    }
}
