//! Task-extraction stage — structured action items from document text.

use serde::{Deserialize, Serialize};

use crate::error::PipelineError;
use crate::llm::{ChatMessage, CompletionRequest, LlmClient};

/// Generation budget for the extraction call.
const TASKS_MAX_TOKENS: u32 = 800;

/// Same low randomness as the summary call.
const TASKS_TEMPERATURE: f32 = 0.2;

/// Task priority as reported by the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Lowercase label for message rendering.
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// One action item extracted from the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskItem {
    pub title: String,
    pub description: String,
    pub estimated_minutes: u32,
    pub priority: Priority,
}

/// Outcome of the extraction stage: parsed tasks, or the raw model
/// text when it could not be parsed. The raw text is never discarded;
/// it is surfaced to the user for manual inspection.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskOutcome {
    Parsed(Vec<TaskItem>),
    Malformed { raw: String },
}

fn build_tasks_prompt(text: &str) -> String {
    format!(
        "Extract action items from the following document. Respond with ONLY a JSON array, \
         no prose. Each element must have exactly these fields: \
         \"title\" (string), \"description\" (string), \"estimated_minutes\" (number), \
         \"priority\" (one of \"low\", \"medium\", \"high\").\n\n{text}"
    )
}

/// Ask the model for action items and parse its response.
///
/// Independent of the summary call; the two run concurrently. An `Err`
/// here means the service call itself failed — a response that merely
/// fails to parse is a `Malformed` outcome, not an error.
pub async fn extract_tasks(
    llm: &dyn LlmClient,
    text: &str,
) -> Result<TaskOutcome, PipelineError> {
    let request = CompletionRequest::new(vec![ChatMessage::user(build_tasks_prompt(text))])
        .with_temperature(TASKS_TEMPERATURE)
        .with_max_tokens(TASKS_MAX_TOKENS);

    let response = llm
        .complete(request)
        .await
        .map_err(|e| PipelineError::Http(e.to_string()))?;

    Ok(parse_tasks(&response.content))
}

/// Parse a model response into tasks.
///
/// Best-effort recovery: models often preface the JSON array with
/// prose, so parsing starts at the first `[`. Anything that still
/// fails to parse comes back verbatim as `Malformed`.
pub fn parse_tasks(raw: &str) -> TaskOutcome {
    let Some(start) = raw.find('[') else {
        return TaskOutcome::Malformed {
            raw: raw.to_string(),
        };
    };

    match serde_json::from_str::<Vec<TaskItem>>(&raw[start..]) {
        Ok(tasks) => TaskOutcome::Parsed(tasks),
        Err(_) => TaskOutcome::Malformed {
            raw: raw.to_string(),
        },
    }
}
