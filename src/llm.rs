//! Language-model service client.
//!
//! One narrow interface: a chat-completion call returning the text of
//! the first choice. The pipeline stages depend on the [`LlmClient`]
//! trait so tests can substitute mocks; [`OpenAiClient`] is the real
//! OpenAI-compatible implementation over reqwest.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::Value;

use crate::error::LlmError;

/// One chat message in a completion request.
#[derive(Debug, Clone, Serialize)]
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

    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }
}

/// Parameters for a single completion call.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl CompletionRequest {
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            temperature: 0.2,
            max_tokens: 1024,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

/// Trimmed text of the first returned choice.
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    pub content: String,
}

/// Completion interface — the only thing the pipeline knows about the
/// model service.
#[async_trait]
pub trait LlmClient: Send + Sync {
    fn model_name(&self) -> &str;

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError>;
}

/// OpenAI-compatible chat-completions client.
pub struct OpenAiClient {
    api_key: SecretString,
    api_base: String,
    model: String,
    client: reqwest::Client,
}

impl OpenAiClient {
    pub fn new(api_key: SecretString, api_base: String, model: String) -> Self {
        Self {
            api_key,
            api_base: api_base.trim_end_matches('/').to_string(),
            model,
            client: reqwest::Client::new(),
        }
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.api_base)
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    fn model_name(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let body = serde_json::json!({
            "model": self.model,
            "messages": request.messages,
            "temperature": request.temperature,
            "max_tokens": request.max_tokens,
        });

        let resp = self
            .client
            .post(self.completions_url())
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::RequestFailed {
                reason: e.to_string(),
            })?;

        if !resp.status().is_success() {
            return Err(LlmError::BadStatus {
                status: resp.status().as_u16(),
            });
        }

        let data: Value = resp.json().await.map_err(|e| LlmError::RequestFailed {
            reason: e.to_string(),
        })?;

        let content = first_choice_content(&data).ok_or(LlmError::NoChoices)?;
        Ok(CompletionResponse {
            content: content.trim().to_string(),
        })
    }
}

/// Pull `choices[0].message.content` out of a completion response.
fn first_choice_content(data: &Value) -> Option<&str> {
    data.get("choices")
        .and_then(Value::as_array)
        .and_then(|choices| choices.first())
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(Value::as_str)
}
