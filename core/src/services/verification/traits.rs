//! Traits for code storage and email delivery integration

use async_trait::async_trait;
use std::time::Duration;

use crate::domain::entities::verification_code::CodeKey;
use crate::errors::DomainError;

/// Key-value store for verification codes with per-entry expiry
#[async_trait]
pub trait VerificationCodeStore: Send + Sync {
    /// Store `code` under `key` for `ttl`, unconditionally replacing any
    /// previous value and resetting its expiry.
    ///
    /// Concurrent writers for the same key resolve last-writer-wins.
    async fn put(&self, key: &CodeKey, code: &str, ttl: Duration) -> Result<(), DomainError>;

    /// Return the live code for `key`, if any
    async fn get(&self, key: &CodeKey) -> Result<Option<String>, DomainError>;
}

/// Outbound email delivery
#[async_trait]
pub trait EmailNotifier: Send + Sync {
    /// Send a verification code to `email`
    async fn send_verification_email(&self, email: &str, code: &str) -> Result<(), DomainError>;
}
