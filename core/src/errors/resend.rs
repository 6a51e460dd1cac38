//! Error taxonomy of the resend-verification workflow.
//!
//! Every failure of the workflow is surfaced exactly once as one of these
//! kinds. Wrapped causes are kept for diagnostics and never reach the
//! error response handed to the transport layer.

use std::fmt;

use thiserror::Error;
use vc_shared::errors::{error_codes, ErrorResponse, IntoErrorResponse, StatusClass};

use super::DomainError;

/// Step of the workflow an error originated from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowStage {
    Lookup,
    Generate,
    Persist,
    Dispatch,
}

impl WorkflowStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lookup => "user lookup",
            Self::Generate => "code generation",
            Self::Persist => "code persistence",
            Self::Dispatch => "email dispatch",
        }
    }
}

impl fmt::Display for WorkflowStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure outcome of a resend request
#[derive(Error, Debug)]
pub enum ResendError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("User not found")]
    UserNotFound,

    #[error("Account is not active")]
    AccountInactive,

    #[error("Internal fault during {stage}")]
    InternalFault {
        stage: WorkflowStage,
        #[source]
        source: DomainError,
    },

    #[error("Verification email could not be delivered")]
    DeliveryFailed {
        #[source]
        source: DomainError,
    },

    #[error("Request cancelled during {stage}")]
    Cancelled { stage: WorkflowStage },
}

impl ResendError {
    /// Machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => error_codes::INVALID_INPUT,
            Self::UserNotFound => error_codes::USER_NOT_FOUND,
            Self::AccountInactive => error_codes::ACCOUNT_INACTIVE,
            Self::InternalFault { .. } => error_codes::INTERNAL_ERROR,
            Self::DeliveryFailed { .. } => error_codes::EMAIL_SEND_FAILED,
            Self::Cancelled { .. } => error_codes::REQUEST_CANCELLED,
        }
    }

    /// Suggested response status class for the transport layer
    pub fn status_class(&self) -> StatusClass {
        match self {
            Self::InvalidInput { .. } => StatusClass::BadRequest,
            Self::UserNotFound => StatusClass::NotFound,
            Self::AccountInactive => StatusClass::Forbidden,
            Self::InternalFault { .. } => StatusClass::Internal,
            Self::DeliveryFailed { .. } => StatusClass::BadGateway,
            Self::Cancelled { .. } => StatusClass::RequestTimeout,
        }
    }

    /// Message safe to show to the caller
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidInput { message } => format!("Invalid input data: {}", message),
            Self::UserNotFound => "User not found".to_string(),
            Self::AccountInactive => "Your account is not active".to_string(),
            Self::InternalFault { .. } => "Internal server error".to_string(),
            Self::DeliveryFailed { .. } => {
                "The verification email could not be sent. Please try again later.".to_string()
            }
            Self::Cancelled { .. } => "The request was cancelled before it completed".to_string(),
        }
    }

    /// Whether repeating the whole request may succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::DeliveryFailed { .. } | Self::Cancelled { .. })
    }
}

impl IntoErrorResponse for ResendError {
    fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse::new(self.code(), self.user_message(), self.status_class())
            .retryable(self.is_retryable())
    }
}
