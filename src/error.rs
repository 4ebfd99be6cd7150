//! Error types for Cliq Brief.

/// Configuration-related errors. Startup fails fast on these.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Language-model service errors.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("Completion request failed: {reason}")]
    RequestFailed { reason: String },

    #[error("Completion endpoint returned status {status}")]
    BadStatus { status: u16 },

    #[error("Completion response contained no choices")]
    NoChoices,
}

/// Failures inside one event's processing pipeline.
///
/// Every variant is caught at the orchestrator boundary after the
/// webhook has been acknowledged; none of these reach the caller.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Attachment carries no usable file URL")]
    NoFileUrl,

    #[error("File download failed with status {status}")]
    DownloadFailed { status: u16 },

    #[error("Document could not be decoded: {0}")]
    UnreadableDocument(String),

    #[error("Extracted text is empty or too short to process")]
    EmptyDocument,

    #[error("Summarization unavailable: {reason}")]
    SummarizationUnavailable { reason: String },

    #[error("Publish to channel failed with status {status}")]
    PublishFailed { status: u16 },

    #[error("HTTP error: {0}")]
    Http(String),
}
