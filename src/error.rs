//! API Errors
//!
//! Single failure type returned by every network call.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// No response reached us
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx JSON response
    #[error("request failed with status {status}")]
    Status { status: u16, detail: Option<String> },

    /// Non-2xx upload; the body is not parsed
    #[error("upload failed with status {0}")]
    Upload(u16),

    /// 2xx body that does not match the expected shape
    #[error("unexpected response body: {0}")]
    Decode(String),

    /// A browser API was missing or threw
    #[error("browser api error: {0}")]
    Browser(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Build a status failure from the raw response body
    pub fn from_status(status: u16, body: &str) -> Self {
        let parsed: Value = serde_json::from_str(body).unwrap_or_else(|_| Value::Object(Default::default()));
        ApiError::Status {
            status,
            detail: extract_detail(&parsed),
        }
    }

    /// Server-provided message, when the failure carried one
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Text for a toast: the server message or `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_string()
    }
}

/// `detail` is a string for handled errors and a list of
/// `{loc, msg, type}` objects for request validation errors.
fn extract_detail(body: &Value) -> Option<String> {
    match body.get("detail")? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(entries) => {
            let msgs: Vec<&str> = entries
                .iter()
                .filter_map(|e| e.get("msg").and_then(Value::as_str))
                .collect();
            if msgs.is_empty() {
                None
            } else {
                Some(msgs.join("; "))
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_detail() {
        let err = ApiError::from_status(401, r#"{"detail":"Invalid username or password"}"#);
        assert_eq!(err.detail(), Some("Invalid username or password"));
        assert_eq!(err.user_message("Login failed"), "Invalid username or password");
    }

    #[test]
    fn test_validation_detail_list() {
        let body = r#"{"detail":[{"loc":["body","password"],"msg":"String should have at least 8 characters","type":"string_too_short"}]}"#;
        let err = ApiError::from_status(422, body);
        assert_eq!(err.detail(), Some("String should have at least 8 characters"));
    }

    #[test]
    fn test_unparseable_body_falls_back() {
        let err = ApiError::from_status(500, "Internal Server Error");
        assert_eq!(err, ApiError::Status { status: 500, detail: None });
        assert_eq!(err.user_message("Failed to create category"), "Failed to create category");
    }

    #[test]
    fn test_upload_never_has_detail() {
        assert_eq!(ApiError::Upload(413).user_message("Upload failed"), "Upload failed");
        assert_eq!(ApiError::Network("offline".into()).detail(), None);
    }
}
