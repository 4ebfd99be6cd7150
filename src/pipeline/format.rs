//! Result message rendering.
//!
//! Deterministic: the same (summary, tasks) pair always renders to
//! byte-identical text. Tasks keep their extraction order.

use super::tasks::TaskOutcome;

/// Render the final channel message.
pub fn render_message(summary: &str, tasks: &TaskOutcome) -> String {
    let mut out = String::new();

    out.push_str("*Summary:*\n");
    out.push_str(summary);
    out.push_str("\n\n*Tasks:*\n");

    match tasks {
        TaskOutcome::Parsed(items) if items.is_empty() => {
            out.push_str("_No action items found._");
        }
        TaskOutcome::Parsed(items) => {
            for (i, task) in items.iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                out.push_str(&format!(
                    "{}. *{}* ({}) — {} min\n   {}",
                    i + 1,
                    task.title,
                    task.priority.label(),
                    task.estimated_minutes,
                    task.description
                ));
            }
        }
        TaskOutcome::Malformed { raw } => {
            out.push_str("Error generating tasks:\n");
            out.push_str(raw);
        }
    }

    out
}
