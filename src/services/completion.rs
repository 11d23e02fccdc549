use std::{sync::Arc, time::Duration};

use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    models::domain::{Endpoint, PromptMessage},
};

pub const TEMPERATURE: f32 = 0.7;

/// Body of a chat completion call. Serialized as-is for OpenAI-compatible APIs.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<PromptMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Returns the text of the first completion choice.
    async fn complete(&self, request: CompletionRequest) -> AppResult<String>;
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

fn first_choice_text(response: ChatCompletionResponse) -> AppResult<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| AppError::ProviderError("completion response contained no text".to_string()))
}

pub struct OpenAiCompletionProvider {
    client: Client<OpenAIConfig>,
}

impl OpenAiCompletionProvider {
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.llm_api_key.expose_secret())
            .with_api_base(config.llm_api_base.clone());

        Self {
            client: Client::with_config(openai_config),
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenAiCompletionProvider {
    async fn complete(&self, request: CompletionRequest) -> AppResult<String> {
        log::debug!(
            "sending completion request model={} max_tokens={}",
            request.model,
            request.max_tokens
        );

        let response: ChatCompletionResponse = self.client.chat().create_byot(request).await?;
        first_choice_text(response)
    }
}

/// Fixes model, temperature and per-endpoint token ceiling; one call, no retry.
#[derive(Clone)]
pub struct CompletionInvoker {
    provider: Arc<dyn CompletionProvider>,
    model: String,
    timeout: Duration,
}

impl CompletionInvoker {
    pub fn new(provider: Arc<dyn CompletionProvider>, model: impl Into<String>, timeout: Duration) -> Self {
        Self {
            provider,
            model: model.into(),
            timeout,
        }
    }

    pub fn request_for(&self, endpoint: Endpoint, messages: [PromptMessage; 2]) -> CompletionRequest {
        CompletionRequest {
            model: self.model.clone(),
            messages: messages.to_vec(),
            temperature: TEMPERATURE,
            max_tokens: endpoint.max_tokens(),
        }
    }

    pub async fn invoke(&self, endpoint: Endpoint, messages: [PromptMessage; 2]) -> AppResult<String> {
        let request = self.request_for(endpoint, messages);

        match tokio::time::timeout(self.timeout, self.provider.complete(request)).await {
            Ok(result) => result,
            Err(_) => Err(AppError::ProviderError(format!(
                "completion request timed out after {}s",
                self.timeout.as_secs_f32()
            ))),
        }
    }
}
