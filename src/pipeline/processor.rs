//! Pipeline orchestrator — runs the document stages for one event.
//!
//! The webhook handler acknowledges the caller and hands the raw event
//! to [`DocumentPipeline::process`] in a detached task. From that point
//! on, every stage failure is caught here: logged, possibly turned into
//! a best-effort channel notice, and never propagated anywhere else.
//!
//! Stage order per event:
//! resolve → download → extract → (summarize + extract tasks) → format
//! → publish. Download and extraction are strictly sequential; the two
//! model calls are independent and joined concurrently.

use std::sync::Arc;

use serde_json::Value;
use uuid::Uuid;

use super::tasks::TaskOutcome;
use super::{format, summarize, tasks};
use crate::cliq::CliqApi;
use crate::error::PipelineError;
use crate::event;
use crate::extract;
use crate::llm::LlmClient;

/// Extracted text shorter than this (after trimming) is treated as an
/// extraction failure, not as valid empty content.
const MIN_DOCUMENT_CHARS: usize = 20;

/// Orchestrates the document stages for one inbound event.
///
/// Holds no per-event state: one instance is shared by every spawned
/// event task.
pub struct DocumentPipeline {
    llm: Arc<dyn LlmClient>,
    cliq: Arc<dyn CliqApi>,
    default_channel: Option<String>,
}

impl DocumentPipeline {
    pub fn new(
        llm: Arc<dyn LlmClient>,
        cliq: Arc<dyn CliqApi>,
        default_channel: Option<String>,
    ) -> Self {
        Self {
            llm,
            cliq,
            default_channel,
        }
    }

    /// Process one acknowledged webhook event to completion.
    pub async fn process(&self, event: Value) {
        let event_id = Uuid::new_v4();
        let channel = event::resolve_channel_id(&event, self.default_channel.as_deref());
        tracing::info!(
            %event_id,
            channel = channel.as_deref().unwrap_or("-"),
            "Processing webhook event"
        );

        match self.run(&event).await {
            Ok(None) => {
                tracing::debug!(%event_id, "Event carries no attachment; nothing to do");
            }
            Ok(Some(message)) => {
                let Some(channel) = channel.as_deref() else {
                    tracing::warn!(%event_id, "No destination channel resolved; dropping result");
                    return;
                };
                if let Err(e) = self.cliq.post_message(channel, &message).await {
                    tracing::error!(%event_id, error = %e, "Failed to publish result");
                }
            }
            Err(err) => {
                tracing::warn!(%event_id, error = %err, "Pipeline aborted");
                let (Some(channel), Some(notice)) = (channel.as_deref(), failure_notice(&err))
                else {
                    return;
                };
                if let Err(e) = self.cliq.post_message(channel, &notice).await {
                    tracing::error!(%event_id, error = %e, "Failed to publish failure notice");
                }
            }
        }
    }

    /// Run the stages. `Ok(None)` means the event had no attachment
    /// and there is nothing to say about it.
    async fn run(&self, event: &Value) -> Result<Option<String>, PipelineError> {
        let Some(attachment) = event::first_attachment(event) else {
            return Ok(None);
        };
        let url = event::attachment_url(attachment).ok_or(PipelineError::NoFileUrl)?;

        let bytes = self.cliq.download_file(&url).await?;
        let text = extract::extract_pdf_text(&bytes)?;

        if text.trim().chars().count() < MIN_DOCUMENT_CHARS {
            return Err(PipelineError::EmptyDocument);
        }
        let text = extract::truncate_chars(&text, extract::MAX_DOCUMENT_CHARS);

        // Independent calls on the same text; neither blocks the other,
        // and each is optional for the final message.
        let (summary, tasks) = tokio::join!(
            summarize::summarize(self.llm.as_ref(), &text),
            tasks::extract_tasks(self.llm.as_ref(), &text),
        );

        let summary = summary.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Summarization failed; continuing without summary");
            String::new()
        });
        let tasks = tasks.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Task extraction failed; continuing without tasks");
            TaskOutcome::Parsed(Vec::new())
        });

        Ok(Some(format::render_message(&summary, &tasks)))
    }
}

/// Best-effort user-facing notice for a stage failure.
///
/// `None` means the failure is logged only.
fn failure_notice(err: &PipelineError) -> Option<String> {
    match err {
        PipelineError::NoFileUrl => Some(
            "Could not find a file URL on the attachment. Please re-upload the document."
                .to_string(),
        ),
        PipelineError::DownloadFailed { status } => Some(format!(
            "Could not download the attached file (status {status})."
        )),
        PipelineError::UnreadableDocument(_) => {
            Some("Could not read the attached document. Is it a valid PDF?".to_string())
        }
        PipelineError::EmptyDocument => {
            Some("The document contains no extractable text.".to_string())
        }
        _ => None,
    }
}
