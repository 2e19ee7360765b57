//! Uniform response envelope

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Envelope wrapped around every response body.
///
/// Success: `{"error": false, "data": {...}, "timestamp": "...", "message": "..."}`
/// (`message` is optional).
/// Error: `{"error": true, "message": "...", "timestamp": "..."}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// `true` when the request failed
    pub error: bool,
    /// Payload. Absent on error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable status. Always present on error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Moment the response was produced (RFC 3339, UTC)
    pub timestamp: DateTime<Utc>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            error: false,
            data: Some(data),
            message: None,
            timestamp: Utc::now(),
        }
    }

    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::success(data)
        }
    }
}

impl ApiResponse<()> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            error: true,
            data: None,
            message: Some(message.into()),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn success_omits_message_when_unset() {
        let body = serde_json::to_value(ApiResponse::success(json!({"a": 1}))).unwrap();
        assert_eq!(body["error"], false);
        assert_eq!(body["data"]["a"], 1);
        assert!(body.get("message").is_none());
        assert!(body["timestamp"].is_string());
    }

    #[test]
    fn error_has_message_and_no_data() {
        let body = serde_json::to_value(ApiResponse::error("nope")).unwrap();
        assert_eq!(body["error"], true);
        assert_eq!(body["message"], "nope");
        assert!(body.get("data").is_none());
    }

    #[test]
    fn timestamp_is_rfc3339() {
        let body = serde_json::to_value(ApiResponse::with_message(1, "ok")).unwrap();
        let raw = body["timestamp"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(raw).is_ok());
        assert_eq!(body["message"], "ok");
    }
}
