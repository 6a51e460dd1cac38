//! Audit log entity for recording security-relevant events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Action names recorded in the audit trail
pub mod actions {
    pub const EMAIL_VERIFICATION_RESENT: &str = "email verification resent";
    pub const EMAIL_VERIFIED: &str = "email verified";
}

/// Immutable audit trail entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuditLog {
    /// Unique identifier for the log entry
    pub id: Uuid,

    /// Action being audited
    pub action: String,

    /// Subject user, if known
    pub user_id: Option<i64>,

    /// Free-text description of the event
    pub description: Option<String>,

    /// IP address of the request
    pub ip_address: Option<String>,

    /// User agent string from the request
    pub user_agent: Option<String>,

    /// Route that triggered the event
    pub route: Option<String>,

    /// Request method
    pub method: Option<String>,

    /// Response status reported to the caller
    pub status_code: Option<u16>,

    /// Timestamp when the event occurred
    pub created_at: DateTime<Utc>,
}

impl AuditLog {
    /// Create a new audit log entry for `action`
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            action: action.into(),
            user_id: None,
            description: None,
            ip_address: None,
            user_agent: None,
            route: None,
            method: None,
            status_code: None,
            created_at: Utc::now(),
        }
    }

    /// Attach the subject user
    pub fn with_user(mut self, user_id: i64) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Attach a human-readable description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach request provenance
    pub fn with_request(
        mut self,
        ip_address: impl Into<String>,
        user_agent: impl Into<String>,
        route: impl Into<String>,
        method: impl Into<String>,
        status_code: u16,
    ) -> Self {
        self.ip_address = Some(ip_address.into());
        self.user_agent = Some(user_agent.into());
        self.route = Some(route.into());
        self.method = Some(method.into());
        self.status_code = Some(status_code);
        self
    }
}
