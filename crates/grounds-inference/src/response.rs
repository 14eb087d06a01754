//! Repair and coercion of raw model output into a [`NoteAnalysis`].
//!
//! Models wrap JSON in prose or code fences despite instructions, so the
//! object is cut from the first `{` to the last `}` before parsing. Fields are
//! then coerced individually rather than rejecting the whole object.

use serde_json::Value;

use grounds_core::{NoteAnalysis, Sentiment};

/// Slice the trimmed output from the first `{` through the last `}`.
///
/// Returns `None` when there is no such pair in that order.
pub fn extract_json_object(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    let start = trimmed.find('{')?;
    let end = trimmed.rfind('}')?;
    (end > start).then(|| &trimmed[start..=end])
}

/// Coerce a parsed model object into the canonical shape.
///
/// - `summary` that is missing or not a string becomes `""`
/// - `sentiment` that is missing or not one of the three values becomes neutral
/// - `tags` that is not an array becomes empty; non-string entries are dropped
pub fn coerce_analysis(value: &Value) -> NoteAnalysis {
    let summary = value
        .get("summary")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let sentiment = value
        .get("sentiment")
        .and_then(Value::as_str)
        .and_then(|s| s.parse::<Sentiment>().ok())
        .unwrap_or(Sentiment::Neutral);

    let tags = value
        .get("tags")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    NoteAnalysis {
        summary,
        sentiment,
        tags,
    }
}

/// Turn raw model text into an analysis, or `None` if no JSON object can be read from it.
pub fn parse_model_output(raw: &str) -> Option<NoteAnalysis> {
    let span = extract_json_object(raw)?;
    let value: Value = serde_json::from_str(span).ok()?;
    value.is_object().then(|| coerce_analysis(&value))
}
