//! Zoho Cliq REST client — attachment downloads and channel messages.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::error::PipelineError;

/// Cap on a single published message (Cliq rejects oversized bodies).
const CLIQ_MAX_MESSAGE_LENGTH: usize = 10_000;

/// Narrow interface to the chat platform: fetch attachment bytes and
/// publish channel messages. The pipeline depends on this trait so
/// tests can substitute a mock.
#[async_trait]
pub trait CliqApi: Send + Sync {
    /// Single-shot authenticated download. Any non-2xx status is a
    /// hard failure for the event; there is no retry.
    async fn download_file(&self, url: &str) -> Result<Vec<u8>, PipelineError>;

    /// One-shot post of a text message to a channel.
    async fn post_message(&self, channel_id: &str, text: &str) -> Result<(), PipelineError>;
}

/// Cliq REST client, authenticated with a bot OAuth token.
pub struct CliqClient {
    token: SecretString,
    api_base: String,
    client: reqwest::Client,
}

impl CliqClient {
    pub fn new(token: SecretString, api_base: String) -> Self {
        Self {
            token,
            api_base: api_base.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn message_url(&self, channel_id: &str) -> String {
        format!("{}/channelsbyname/{channel_id}/message", self.api_base)
    }

    fn auth_header(&self) -> String {
        format!("Zoho-oauthtoken {}", self.token.expose_secret())
    }
}

#[async_trait]
impl CliqApi for CliqClient {
    async fn download_file(&self, url: &str) -> Result<Vec<u8>, PipelineError> {
        let resp = self
            .client
            .get(url)
            .header("Authorization", self.auth_header())
            .send()
            .await
            .map_err(|e| PipelineError::Http(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(PipelineError::DownloadFailed {
                status: resp.status().as_u16(),
            });
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| PipelineError::Http(e.to_string()))?;

        tracing::debug!(url, size = bytes.len(), "Attachment downloaded");
        Ok(bytes.to_vec())
    }

    async fn post_message(&self, channel_id: &str, text: &str) -> Result<(), PipelineError> {
        let body = serde_json::json!({
            "text": truncate_message(text, CLIQ_MAX_MESSAGE_LENGTH),
        });

        let resp = self
            .client
            .post(self.message_url(channel_id))
            .header("Authorization", self.auth_header())
            .json(&body)
            .send()
            .await
            .map_err(|e| PipelineError::Http(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(PipelineError::PublishFailed {
                status: resp.status().as_u16(),
            });
        }

        tracing::info!(channel = channel_id, "Message published to Cliq");
        Ok(())
    }
}

/// Trim a message to Cliq's size limit, marking the cut.
fn truncate_message(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_len.saturating_sub(1)).collect();
    out.push('…');
    out
}
