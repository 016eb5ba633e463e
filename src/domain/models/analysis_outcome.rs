use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Tag of an [`AnalysisError`], for callers that only need to branch on the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NetworkFailure,
    MalformedResponse,
    ApiError,
    UnexpectedStructure,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NetworkFailure => "network_failure",
            ErrorKind::MalformedResponse => "malformed_response",
            ErrorKind::ApiError => "api_error",
            ErrorKind::UnexpectedStructure => "unexpected_structure",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a call produced no keywords. Each variant carries what is needed to diagnose it.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnalysisError {
    /// DNS, connect, TLS, timeout or body-read failure.
    #[error("network failure: {message}")]
    NetworkFailure { message: String },

    /// Body was not JSON. `raw_content` holds at most the first 200 characters.
    #[error("malformed response (HTTP {status_code}): {raw_content}")]
    MalformedResponse { status_code: u16, raw_content: String },

    /// The service answered with an `error` object.
    #[error("API error: {error}")]
    ApiError { error: Value },

    /// JSON without content or error. `sample` holds at most 3 entries.
    #[error("unexpected response structure: {sample}")]
    UnexpectedStructure { sample: Value },
}

impl AnalysisError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AnalysisError::NetworkFailure { .. } => ErrorKind::NetworkFailure,
            AnalysisError::MalformedResponse { .. } => ErrorKind::MalformedResponse,
            AnalysisError::ApiError { .. } => ErrorKind::ApiError,
            AnalysisError::UnexpectedStructure { .. } => ErrorKind::UnexpectedStructure,
        }
    }
}

/// Result of a single `analyze_text` call. Failures are values, never panics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnalysisOutcome {
    Success { keywords: String },
    Error(AnalysisError),
}

impl AnalysisOutcome {
    pub fn success(keywords: impl Into<String>) -> Self {
        Self::Success {
            keywords: keywords.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn keywords(&self) -> Option<&str> {
        match self {
            Self::Success { keywords } => Some(keywords.as_str()),
            Self::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&AnalysisError> {
        match self {
            Self::Success { .. } => None,
            Self::Error(err) => Some(err),
        }
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.error().map(AnalysisError::kind)
    }

    /// Splits the reply on commas and newlines into individual keywords.
    pub fn keyword_list(&self) -> Vec<String> {
        self.keywords()
            .map(|text| {
                text.split([',', '\n'])
                    .map(str::trim)
                    .filter(|k| !k.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl From<AnalysisError> for AnalysisOutcome {
    fn from(err: AnalysisError) -> Self {
        Self::Error(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_accessors() {
        let outcome = AnalysisOutcome::success("rust, memory safety");

        assert!(outcome.is_success());
        assert_eq!(outcome.keywords(), Some("rust, memory safety"));
        assert!(outcome.error().is_none());
        assert_eq!(outcome.error_kind(), None);
    }

    #[test]
    fn test_error_accessors() {
        let outcome: AnalysisOutcome = AnalysisError::NetworkFailure {
            message: "connection refused".to_string(),
        }
        .into();

        assert!(!outcome.is_success());
        assert_eq!(outcome.keywords(), None);
        assert_eq!(outcome.error_kind(), Some(ErrorKind::NetworkFailure));
        assert!(outcome.keyword_list().is_empty());
    }

    #[test]
    fn test_keyword_list_splits_commas_and_newlines() {
        let outcome = AnalysisOutcome::success("rust, borrow checker,\nownership\n\n , lifetimes");

        assert_eq!(
            outcome.keyword_list(),
            vec!["rust", "borrow checker", "ownership", "lifetimes"]
        );
    }

    #[test]
    fn test_error_kind_of_each_variant() {
        let cases = [
            (
                AnalysisError::NetworkFailure {
                    message: String::new(),
                },
                ErrorKind::NetworkFailure,
            ),
            (
                AnalysisError::MalformedResponse {
                    status_code: 502,
                    raw_content: String::new(),
                },
                ErrorKind::MalformedResponse,
            ),
            (
                AnalysisError::ApiError { error: json!({}) },
                ErrorKind::ApiError,
            ),
            (
                AnalysisError::UnexpectedStructure { sample: json!({}) },
                ErrorKind::UnexpectedStructure,
            ),
        ];

        for (err, kind) in cases {
            assert_eq!(err.kind(), kind);
        }
    }

    #[test]
    fn test_display_messages() {
        let err = AnalysisError::MalformedResponse {
            status_code: 502,
            raw_content: "Bad Gateway".to_string(),
        };
        assert_eq!(err.to_string(), "malformed response (HTTP 502): Bad Gateway");

        let err = AnalysisError::ApiError {
            error: json!({"message": "rate limited"}),
        };
        assert_eq!(err.to_string(), r#"API error: {"message":"rate limited"}"#);
    }

    #[test]
    fn test_outcome_json_is_tagged() {
        let value = serde_json::to_value(AnalysisOutcome::success("a, b")).unwrap();
        assert_eq!(value, json!({"status": "success", "keywords": "a, b"}));

        let value = serde_json::to_value(AnalysisOutcome::Error(AnalysisError::ApiError {
            error: json!({"message": "rate limited"}),
        }))
        .unwrap();
        assert_eq!(
            value,
            json!({
                "status": "error",
                "kind": "api_error",
                "error": {"message": "rate limited"}
            })
        );
    }
}
