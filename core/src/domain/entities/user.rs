//! User entity as seen by the verification workflows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    /// The account can sign in and receive codes
    Active,
    /// The account was suspended by an operator
    Suspended,
    /// The account was deleted (soft delete)
    Deleted,
}

impl AccountStatus {
    /// Convert to string representation for database storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Suspended => "suspended",
            Self::Deleted => "deleted",
        }
    }
}

impl std::fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AccountStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "suspended" => Ok(Self::Suspended),
            "deleted" => Ok(Self::Deleted),
            other => Err(format!("Unknown account status: {}", other)),
        }
    }
}

/// A registered user
///
/// Owned by the identity store; verification workflows only read it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: i64,

    /// Contact address verification codes are sent to
    pub email: String,

    /// Whether the email address has been verified
    pub email_verified: bool,

    /// Account lifecycle status
    pub status: AccountStatus,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new active, unverified user
    pub fn new(id: i64, email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            email: email.into(),
            email_verified: false,
            status: AccountStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the account may receive verification codes
    pub fn is_active(&self) -> bool {
        self.status == AccountStatus::Active
    }

    /// Marks the email address as verified. There is no inverse operation.
    pub fn mark_email_verified(&mut self) {
        self.email_verified = true;
        self.updated_at = Utc::now();
    }

    /// Changes the account status
    pub fn set_status(&mut self, status: AccountStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}
