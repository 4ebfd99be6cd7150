//! PDF text extraction.
//!
//! Pure format decoder: whitespace-only output is valid at this layer.
//! The pipeline applies its own emptiness floor on the result.

use crate::error::PipelineError;

/// Cap on document text forwarded to the model calls.
pub const MAX_DOCUMENT_CHARS: usize = 100_000;

/// Decode a PDF byte buffer into plain text.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, PipelineError> {
    // pdf-extract can panic on some malformed files; a panic is a
    // decode failure like any other.
    match std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes)) {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(PipelineError::UnreadableDocument(e.to_string())),
        Err(_) => Err(PipelineError::UnreadableDocument(
            "decoder panicked".to_string(),
        )),
    }
}

/// Cap text at `max_chars` characters.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
