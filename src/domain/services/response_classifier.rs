//! Turns a [`RawApiResult`] into an [`AnalysisOutcome`].
//!
//! Only the body decides the outcome. The HTTP status is carried along for
//! diagnostics but a 4xx/5xx body holding an `error` object is still reported
//! as [`AnalysisError::ApiError`].

use serde_json::Value;

use crate::domain::{AnalysisError, AnalysisOutcome, RawApiResult};

/// Maximum number of characters of a non-JSON body kept for diagnosis.
pub const RAW_CONTENT_LIMIT: usize = 200;

/// Maximum number of entries kept when the JSON has an unexpected shape.
pub const STRUCTURE_SAMPLE_SIZE: usize = 3;

const CONTENT_POINTER: &str = "/choices/0/message/content";

pub fn classify_response(raw: RawApiResult) -> AnalysisOutcome {
    if raw.is_transport_failure() {
        let message = raw
            .transport_error
            .unwrap_or_else(|| "no response body received".to_string());
        return AnalysisError::NetworkFailure { message }.into();
    }

    let RawApiResult {
        body, status_code, ..
    } = raw;
    let body = body.unwrap_or_default();

    let parsed: Value = match serde_json::from_str(&body) {
        Ok(value) => value,
        Err(_) => {
            return AnalysisError::MalformedResponse {
                status_code,
                raw_content: truncate_chars(&body, RAW_CONTENT_LIMIT),
            }
            .into();
        }
    };

    if let Some(content) = extract_content(&parsed) {
        return AnalysisOutcome::success(content);
    }

    if let Some(error) = parsed.get("error") {
        return AnalysisError::ApiError {
            error: error.clone(),
        }
        .into();
    }

    AnalysisError::UnexpectedStructure {
        sample: sample_entries(&parsed, STRUCTURE_SAMPLE_SIZE),
    }
    .into()
}

/// `choices[0].message.content`, trimmed, when it is a non-empty string.
///
/// Emptiness is checked on the raw string, so whitespace-only content yields `""`.
pub fn extract_content(parsed: &Value) -> Option<&str> {
    parsed
        .pointer(CONTENT_POINTER)
        .and_then(Value::as_str)
        .filter(|content| !content.is_empty())
        .map(str::trim)
}

/// First `limit` entries of an object (document order) or array. Scalars are returned as-is.
pub fn sample_entries(value: &Value, limit: usize) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .take(limit)
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().take(limit).cloned().collect()),
        other => other.clone(),
    }
}

fn truncate_chars(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}
