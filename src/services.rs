// src/services.rs

use super::api::{ChatCompletionRequest, ChatCompletionResponse, Message};
use super::config::Config;
use super::error::UpstreamError;
use async_trait::async_trait;

pub const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

/// Anything able to turn a prompt into the text of a single reply.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, messages: &[Message]) -> Result<String, UpstreamError>;
}

/// Builds the two-message prompt: the fixed system turn, then the user's text verbatim.
pub fn build_prompt(user_text: &str) -> Vec<Message> {
    vec![Message::system(SYSTEM_PROMPT), Message::user(user_text)]
}

pub async fn get_response(
    client: &dyn CompletionClient,
    user_text: &str,
) -> Result<String, UpstreamError> {
    let prompt = build_prompt(user_text);
    client.complete(&prompt).await
}

/// HTTP client for an OpenAI-compatible `/v1/chat/completions` endpoint.
pub struct OpenAiClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
    max_tokens: u32,
}

impl OpenAiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: format!("{}/v1/chat/completions", config.api_base),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
        }
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, messages: &[Message]) -> Result<String, UpstreamError> {
        let body = ChatCompletionRequest {
            model: &self.model,
            messages,
            max_tokens: self.max_tokens,
        };

        tracing::debug!(model = %self.model, turns = messages.len(), "calling completion API");
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed: ChatCompletionResponse = serde_json::from_str(&text)?;
        first_choice_content(parsed)
    }
}

fn first_choice_content(response: ChatCompletionResponse) -> Result<String, UpstreamError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or(UpstreamError::EmptyChoice)?;
    tracing::debug!(role = ?choice.message.role, "completion received");
    choice.message.content.ok_or(UpstreamError::EmptyChoice)
}
