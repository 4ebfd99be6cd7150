//! Process-wide configuration, loaded once at startup.

use secrecy::SecretString;

use crate::error::ConfigError;

/// Default Zoho Cliq REST API base.
const DEFAULT_CLIQ_API_BASE: &str = "https://cliq.zoho.com/api/v2";

/// Default OpenAI-compatible API base.
const DEFAULT_OPENAI_API_BASE: &str = "https://api.openai.com/v1";

/// Immutable configuration shared by every component.
///
/// Constructed once in `main` and passed into components by value or
/// `Arc` — never read as ambient global state after startup.
#[derive(Clone)]
pub struct AppConfig {
    /// Cliq bot token, used for attachment downloads and channel posts.
    pub cliq_token: SecretString,
    /// Cliq REST API base URL (overridable for tests).
    pub cliq_api_base: String,
    /// Credential for the completion endpoint.
    pub openai_api_key: SecretString,
    /// Completion endpoint base URL (overridable for tests).
    pub openai_api_base: String,
    /// Model identifier used for both completion calls.
    pub model: String,
    /// Fallback channel when the event does not carry one.
    pub default_channel: Option<String>,
    /// HTTP listen port.
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from the environment.
    ///
    /// `CLIQ_BOT_TOKEN` and `OPENAI_API_KEY` are required; everything
    /// else has a default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let cliq_token = require_var("CLIQ_BOT_TOKEN")?;
        let openai_api_key = require_var("OPENAI_API_KEY")?;

        let model =
            std::env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());

        let cliq_api_base = std::env::var("CLIQ_API_BASE")
            .unwrap_or_else(|_| DEFAULT_CLIQ_API_BASE.to_string());
        let openai_api_base = std::env::var("OPENAI_API_BASE")
            .unwrap_or_else(|_| DEFAULT_OPENAI_API_BASE.to_string());

        let default_channel = std::env::var("CLIQ_DEFAULT_CHANNEL")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT".into(),
                message: format!("'{raw}' is not a valid port number"),
            })?,
            Err(_) => 3000,
        };

        Ok(Self {
            cliq_token: SecretString::from(cliq_token),
            cliq_api_base,
            openai_api_key: SecretString::from(openai_api_key),
            openai_api_base,
            model,
            default_channel,
            port,
        })
    }
}

fn require_var(key: &str) -> Result<String, ConfigError> {
    match std::env::var(key) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::MissingEnvVar(key.to_string())),
    }
}
