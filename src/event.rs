//! Projection of the heterogeneous Cliq webhook payload.
//!
//! Cliq event shapes vary by message type, so the relevant fields are
//! projected straight out of the raw `serde_json::Value` instead of
//! deserializing into a rigid struct. Absence of a field is never an
//! error here; the pipeline decides what absence means at each stage.

use serde_json::Value;

/// Attachment URL field names, tried in order. First non-empty wins.
const URL_FIELDS: [&str; 3] = ["url", "download_url", "link"];

/// Resolve the destination channel for an event.
///
/// Order: top-level `channel_id`, then nested `channel.id`, then the
/// configured default channel.
pub fn resolve_channel_id(event: &Value, default_channel: Option<&str>) -> Option<String> {
    [
        event.get("channel_id"),
        event.get("channel").and_then(|c| c.get("id")),
    ]
    .into_iter()
    .flatten()
    .filter_map(Value::as_str)
    .map(str::trim)
    .find(|s| !s.is_empty())
    .or(default_channel)
    .map(String::from)
}

/// The first entry of the event's attachments, if any.
///
/// Entries beyond index 0 are ignored: one document per event.
pub fn first_attachment(event: &Value) -> Option<&Value> {
    event
        .get("attachments")
        .and_then(Value::as_array)
        .and_then(|a| a.first())
}

/// A usable fetch URL for one attachment, if any field yields one.
pub fn attachment_url(attachment: &Value) -> Option<String> {
    URL_FIELDS.iter().find_map(|field| {
        attachment
            .get(*field)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
    })
}
