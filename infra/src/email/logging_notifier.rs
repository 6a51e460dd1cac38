//! Development email notifier
//!
//! Validates the recipient and records a masked delivery event instead of
//! sending mail. The code itself is never logged.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};

use vc_core::errors::DomainError;
use vc_core::services::EmailNotifier;
use vc_shared::utils::email::{is_valid_email, mask_email};

#[derive(Debug, Default)]
pub struct LoggingEmailNotifier {
    delivered: AtomicU64,
}

impl LoggingEmailNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of accepted deliveries
    pub fn delivered_count(&self) -> u64 {
        self.delivered.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl EmailNotifier for LoggingEmailNotifier {
    async fn send_verification_email(&self, email: &str, code: &str) -> Result<(), DomainError> {
        if !is_valid_email(email) {
            tracing::warn!(
                email = %mask_email(email),
                event = "verification_email_rejected",
                "Refusing to send verification email to invalid address"
            );
            return Err(DomainError::Notification(format!(
                "Invalid recipient address: {}",
                mask_email(email)
            )));
        }

        self.delivered.fetch_add(1, Ordering::Relaxed);
        tracing::info!(
            email = %mask_email(email),
            code_length = code.len(),
            event = "verification_email_logged",
            "Verification email delivery logged"
        );
        Ok(())
    }
}
