//! Error Types
//!
//! Everything a view can fail with, plus the helpers that turn server error
//! bodies into readable text.

use serde_json::Value;
use thiserror::Error;

use crate::session::PersistError;

/// Failure to read claims out of a session token
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("token must have three dot-separated segments")]
    Malformed,
    #[error("token payload is not valid base64url: {0}")]
    Encoding(String),
    #[error("token payload is not valid claims JSON: {0}")]
    Claims(String),
    #[error("token has expired")]
    Expired,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Missing or invalid local input; no request was made
    #[error("{0}")]
    Validation(String),
    /// Non-2xx response
    #[error("request failed with status {status}: {detail}")]
    Api { status: u16, detail: String },
    #[error("invalid session token: {0}")]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Persist(#[from] PersistError),
    /// Request could not complete (offline, CORS, timeout)
    #[error("network error: {0}")]
    Network(String),
    /// 2xx response whose body did not parse
    #[error("unexpected response: {0}")]
    InvalidResponse(String),
    /// The owning view went away before the request finished
    #[error("request cancelled")]
    Cancelled,
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, AppError::Api { status: 401, .. })
    }

    /// Text suitable for an inline banner
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(message) => message.clone(),
            AppError::Api { detail, .. } => detail.clone(),
            AppError::Decode(_) => "Your session is invalid. Please log in again.".to_string(),
            AppError::Persist(_) => "Could not save your session in this browser.".to_string(),
            AppError::Network(_) => "Could not reach the server. Please try again.".to_string(),
            AppError::InvalidResponse(_) => "The server sent an unexpected response.".to_string(),
            AppError::Cancelled => String::new(),
        }
    }
}

pub fn network_error(error: gloo_net::Error) -> AppError {
    AppError::Network(error.to_string())
}

/// Generic detail for a status when the body has nothing usable
pub fn fallback_detail(status: u16) -> String {
    match status {
        400 => "The request was rejected. Please check your input.".to_string(),
        401 => "⚠️ Session expired. Please log in again.".to_string(),
        403 => "You do not have permission to do that.".to_string(),
        404 => "Not found.".to_string(),
        500..=599 => "The server ran into a problem. Please try again later.".to_string(),
        _ => format!("Request failed (status {status})."),
    }
}

/// Pull a human-readable message out of an error body.
///
/// Understands `{"detail": ..}`, `{"error": ..}`, `{"message": ..}`,
/// `{"non_field_errors": [..]}`, field error maps (`{"username": ["taken"]}`)
/// and bare JSON strings.
pub fn extract_detail(raw: &str) -> Option<String> {
    let value: Value = serde_json::from_str(raw).ok()?;
    match &value {
        Value::String(text) => non_empty(text),
        Value::Object(map) => {
            for key in ["detail", "error", "message", "non_field_errors"] {
                if let Some(text) = map.get(key).and_then(flatten_messages) {
                    return Some(text);
                }
            }
            let fields: Vec<String> = map
                .iter()
                .filter_map(|(field, messages)| {
                    flatten_messages(messages).map(|text| format!("{field}: {text}"))
                })
                .collect();
            if fields.is_empty() { None } else { Some(fields.join("; ")) }
        }
        Value::Array(_) => flatten_messages(&value),
        _ => None,
    }
}

fn flatten_messages(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => non_empty(text),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(flatten_messages).collect();
            if parts.is_empty() { None } else { Some(parts.join(" ")) }
        }
        _ => None,
    }
}

fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_string()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_detail_key() {
        let raw = r#"{"detail": "Submission already verified."}"#;
        assert_eq!(extract_detail(raw).as_deref(), Some("Submission already verified."));
    }

    #[test]
    fn test_extract_error_key() {
        let raw = r#"{"error": "Invalid credentials"}"#;
        assert_eq!(extract_detail(raw).as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn test_extract_field_errors() {
        let raw = r#"{"username": ["A user with that username already exists."], "password": ["This field may not be blank."]}"#;
        let detail = extract_detail(raw).unwrap();
        assert!(detail.contains("username: A user with that username already exists."));
        assert!(detail.contains("password: This field may not be blank."));
    }

    #[test]
    fn test_extract_non_json_is_none() {
        assert_eq!(extract_detail("<html>502 Bad Gateway</html>"), None);
        assert_eq!(extract_detail(r#"{"detail": "  "}"#), None);
    }

    #[test]
    fn test_unauthorized_only_for_401() {
        let expired = AppError::Api { status: 401, detail: "x".into() };
        let forbidden = AppError::Api { status: 403, detail: "x".into() };
        assert!(expired.is_unauthorized());
        assert!(!forbidden.is_unauthorized());
        assert!(!AppError::Network("offline".into()).is_unauthorized());
    }

    #[test]
    fn test_user_message_uses_detail() {
        let err = AppError::Api { status: 400, detail: "Only PNG, JPG, or JPEG files are allowed.".into() };
        assert_eq!(err.user_message(), "Only PNG, JPG, or JPEG files are allowed.");
    }
}
