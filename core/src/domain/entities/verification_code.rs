//! Verification code value objects.

use chrono::{DateTime, Utc};
use std::fmt;
use std::time::Duration;

/// Default lifetime of an issued code
pub const DEFAULT_CODE_TTL_MINUTES: u64 = 15;

/// Default number of symbols in a generated code
pub const DEFAULT_CODE_LENGTH: usize = 8;

/// What a code proves control of
///
/// Several purposes can coexist for one user in the same store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodePurpose {
    Email,
}

impl CodePurpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
        }
    }
}

impl fmt::Display for CodePurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Store key for a code: one live code per `(user_id, purpose)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodeKey {
    pub user_id: i64,
    pub purpose: CodePurpose,
}

impl CodeKey {
    pub fn new(user_id: i64, purpose: CodePurpose) -> Self {
        Self { user_id, purpose }
    }

    /// Key for the email verification code of `user_id`
    pub fn email(user_id: i64) -> Self {
        Self::new(user_id, CodePurpose::Email)
    }

    /// Key pattern: `verification:{purpose}:{user_id}`
    pub fn storage_key(&self) -> String {
        format!("verification:{}:{}", self.purpose, self.user_id)
    }
}

impl fmt::Display for CodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.storage_key())
    }
}

/// A freshly issued code on its way to the store and the notifier
///
/// The code itself never appears in `Debug` output.
#[derive(Clone)]
pub struct IssuedCode {
    pub key: CodeKey,
    code: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl IssuedCode {
    pub fn new(key: CodeKey, code: String, ttl: Duration) -> Self {
        let issued_at = Utc::now();
        let lifetime = chrono::Duration::milliseconds(ttl.as_millis().min(i64::MAX as u128) as i64);
        Self {
            key,
            code,
            issued_at,
            expires_at: issued_at
                .checked_add_signed(lifetime)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
        }
    }

    /// The secret value
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Checks if the code has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Time left before expiry, zero once expired
    pub fn remaining(&self) -> Duration {
        (self.expires_at - Utc::now()).to_std().unwrap_or(Duration::ZERO)
    }
}

impl fmt::Debug for IssuedCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IssuedCode")
            .field("key", &self.key)
            .field("code", &"[redacted]")
            .field("issued_at", &self.issued_at)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}
