//! Shared error types and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Standard error response structure handed to the transport layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for client identification
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Suggested response status class
    pub status: StatusClass,

    /// Whether the client may retry the same request
    #[serde(default)]
    pub retryable: bool,

    /// Additional error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>, status: StatusClass) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            status,
            retryable: false,
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Mark the response as retryable
    pub fn retryable(mut self, retryable: bool) -> Self {
        self.retryable = retryable;
        self
    }

    /// Add a detail field to the error response
    pub fn add_detail(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        let details = self.details.get_or_insert_with(HashMap::new);
        if let Ok(json_value) = serde_json::to_value(value) {
            details.insert(key.into(), json_value);
        }
        self
    }
}

/// Protocol-neutral response class suggested for an error
///
/// The transport layer maps these onto its own status codes; `http_status`
/// gives the conventional HTTP mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusClass {
    BadRequest,
    NotFound,
    Forbidden,
    RequestTimeout,
    Internal,
    BadGateway,
}

impl StatusClass {
    /// Conventional HTTP status code for this class
    pub fn http_status(&self) -> u16 {
        match self {
            StatusClass::BadRequest => 400,
            StatusClass::Forbidden => 403,
            StatusClass::NotFound => 404,
            StatusClass::RequestTimeout => 408,
            StatusClass::Internal => 500,
            StatusClass::BadGateway => 502,
        }
    }

    /// Whether the class denotes a server-side problem
    pub fn is_server_error(&self) -> bool {
        self.http_status() >= 500
    }
}

/// Common error codes used across the application
pub mod error_codes {
    pub const INVALID_INPUT: &str = "INVALID_INPUT";
    pub const USER_NOT_FOUND: &str = "USER_NOT_FOUND";
    pub const ACCOUNT_INACTIVE: &str = "ACCOUNT_INACTIVE";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
    pub const EMAIL_SEND_FAILED: &str = "EMAIL_SEND_FAILED";
    pub const REQUEST_CANCELLED: &str = "REQUEST_CANCELLED";
}

/// Trait for converting errors to ErrorResponse
pub trait IntoErrorResponse {
    fn to_error_response(&self) -> ErrorResponse;
}

/// Result type with ErrorResponse as error
pub type ApiResult<T> = Result<T, ErrorResponse>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_class_http_mapping() {
        assert_eq!(StatusClass::NotFound.http_status(), 404);
        assert_eq!(StatusClass::Forbidden.http_status(), 403);
        assert_eq!(StatusClass::BadGateway.http_status(), 502);
        assert!(StatusClass::Internal.is_server_error());
        assert!(!StatusClass::BadRequest.is_server_error());
    }

    #[test]
    fn test_error_response_serialization() {
        let response = ErrorResponse::new(error_codes::USER_NOT_FOUND, "User not found", StatusClass::NotFound)
            .add_detail("user_id", 7);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["error"], "USER_NOT_FOUND");
        assert_eq!(json["status"], "not_found");
        assert_eq!(json["retryable"], false);
        assert_eq!(json["details"]["user_id"], 7);
    }
}
