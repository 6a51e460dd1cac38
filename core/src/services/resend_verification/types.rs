//! Request and response types for the resend verification service

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Resend request payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResendVerificationCommand {
    #[validate(range(min = 1, message = "user_id must be a positive integer"))]
    pub user_id: i64,
}

impl ResendVerificationCommand {
    pub fn new(user_id: i64) -> Self {
        Self { user_id }
    }
}

/// Request provenance recorded in the audit trail
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestContext {
    pub ip_address: String,
    pub user_agent: String,
}

impl RequestContext {
    pub fn new(ip_address: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            ip_address: ip_address.into(),
            user_agent: user_agent.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResendStatus {
    AlreadyVerified,
    CodeSent,
}

/// Successful outcome of a resend request; never carries the code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResendOutcome {
    pub success: bool,
    pub message: String,
    pub status: ResendStatus,
}

impl ResendOutcome {
    pub fn already_verified() -> Self {
        Self {
            success: true,
            message: "Email already verified".to_string(),
            status: ResendStatus::AlreadyVerified,
        }
    }

    pub fn code_sent() -> Self {
        Self {
            success: true,
            message: "New code sent to your email".to_string(),
            status: ResendStatus::CodeSent,
        }
    }
}
