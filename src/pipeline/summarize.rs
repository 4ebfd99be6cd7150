//! Summarization stage — one completion call, bullet-point output.

use crate::error::PipelineError;
use crate::llm::{ChatMessage, CompletionRequest, LlmClient};

/// Generation budget for the summary call.
const SUMMARY_MAX_TOKENS: u32 = 800;

/// Low randomness — the same document should summarize stably.
const SUMMARY_TEMPERATURE: f32 = 0.2;

fn build_summary_prompt(text: &str) -> String {
    format!("Summarize the following document in 3-5 bullet points:\n\n{text}")
}

/// Produce a short bullet summary of `text` (already length-capped).
///
/// A service failure here is not fatal to the event: the caller logs
/// it and falls back to an empty summary.
pub async fn summarize(llm: &dyn LlmClient, text: &str) -> Result<String, PipelineError> {
    let request = CompletionRequest::new(vec![ChatMessage::user(build_summary_prompt(text))])
        .with_temperature(SUMMARY_TEMPERATURE)
        .with_max_tokens(SUMMARY_MAX_TOKENS);

    let response =
        llm.complete(request)
            .await
            .map_err(|e| PipelineError::SummarizationUnavailable {
                reason: e.to_string(),
            })?;

    Ok(response.content.trim().to_string())
}
