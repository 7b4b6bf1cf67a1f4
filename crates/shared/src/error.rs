use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    NotFound,
    #[default]
    Internal,
}

/// Error body returned by the HTTP service.
///
/// Serializes as `{"error": "<message>"}`; the code only drives the status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{code:?}: {message}")]
pub struct ApiError {
    #[serde(skip)]
    pub code: ErrorCode,
    #[serde(rename = "error")]
    pub message: String,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn person_not_found() -> Self {
        Self::new(ErrorCode::NotFound, PERSON_NOT_FOUND)
    }
}

pub const PERSON_NOT_FOUND: &str = "Person not found";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_body_only_carries_error_message() {
        let body = serde_json::to_value(ApiError::person_not_found()).expect("json");
        assert_eq!(body, serde_json::json!({ "error": "Person not found" }));
    }

    #[test]
    fn error_body_round_trips_message() {
        let parsed: ApiError =
            serde_json::from_str(r#"{"error":"Person not found"}"#).expect("parse");
        assert_eq!(parsed.message, PERSON_NOT_FOUND);
        assert_eq!(parsed.code, ErrorCode::Internal);
    }
}
