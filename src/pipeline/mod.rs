//! Document processing pipeline: summarize + extract tasks + publish.

pub mod format;
pub mod processor;
pub mod summarize;
pub mod tasks;

pub use processor::DocumentPipeline;
pub use tasks::{Priority, TaskItem, TaskOutcome};
