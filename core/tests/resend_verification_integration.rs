//! Integration tests for the resend verification workflow through the public API

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use vc_core::domain::entities::{AuditLog, CodeKey, User};
use vc_core::errors::{DomainError, ResendError};
use vc_core::repositories::{AuditLogRepository, NoOpAuditLogRepository, UserRepository};
use vc_core::services::{
    CallContext, EmailNotifier, RequestContext, ResendStatus, ResendVerificationCommand,
    ResendVerificationConfig, ResendVerificationService, SecureCodeGenerator,
    VerificationCodeStore,
};
use vc_shared::config::VerificationConfig;
use vc_shared::errors::IntoErrorResponse;

#[derive(Default)]
struct InMemoryUsers(HashMap<i64, User>);

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        Ok(self.0.get(&id).cloned())
    }
}

#[derive(Default)]
struct InMemoryStore(Mutex<HashMap<String, String>>);

#[async_trait]
impl VerificationCodeStore for InMemoryStore {
    async fn put(&self, key: &CodeKey, code: &str, _ttl: Duration) -> Result<(), DomainError> {
        self.0.lock().unwrap().insert(key.storage_key(), code.to_string());
        Ok(())
    }

    async fn get(&self, key: &CodeKey) -> Result<Option<String>, DomainError> {
        Ok(self.0.lock().unwrap().get(&key.storage_key()).cloned())
    }
}

#[derive(Default)]
struct Outbox {
    messages: Mutex<Vec<(String, String)>>,
    fail: bool,
}

#[async_trait]
impl EmailNotifier for Outbox {
    async fn send_verification_email(&self, email: &str, code: &str) -> Result<(), DomainError> {
        if self.fail {
            return Err(DomainError::Notification("mailbox unavailable".to_string()));
        }
        self.messages
            .lock()
            .unwrap()
            .push((email.to_string(), code.to_string()));
        Ok(())
    }
}

#[derive(Default)]
struct AuditTrail(Mutex<Vec<AuditLog>>);

#[async_trait]
impl AuditLogRepository for AuditTrail {
    async fn create(&self, audit_log: &AuditLog) -> Result<(), DomainError> {
        self.0.lock().unwrap().push(audit_log.clone());
        Ok(())
    }

    async fn find_by_user(&self, user_id: i64, limit: usize) -> Result<Vec<AuditLog>, DomainError> {
        Ok(self
            .0
            .lock()
            .unwrap()
            .iter()
            .filter(|log| log.user_id == Some(user_id))
            .take(limit)
            .cloned()
            .collect())
    }
}

fn users() -> InMemoryUsers {
    let mut map = HashMap::new();
    map.insert(7, User::new(7, "ada@example.com"));
    let mut verified = User::new(8, "grace@example.com");
    verified.mark_email_verified();
    map.insert(8, verified);
    InMemoryUsers(map)
}

#[tokio::test]
async fn test_resend_end_to_end() {
    let store = Arc::new(InMemoryStore::default());
    let outbox = Arc::new(Outbox::default());
    let audit = Arc::new(AuditTrail::default());

    let service = ResendVerificationService::new(
        Arc::new(users()),
        Arc::new(SecureCodeGenerator::default()),
        store.clone(),
        outbox.clone(),
        audit.clone(),
        ResendVerificationConfig::from(&VerificationConfig::default()),
    );

    let outcome = service
        .execute(
            &ResendVerificationCommand::new(7),
            &RequestContext::new("192.0.2.10", "integration-test"),
            &CallContext::new(),
        )
        .await
        .expect("resend should succeed");

    assert!(outcome.success);
    assert_eq!(outcome.status, ResendStatus::CodeSent);

    let stored = store.get(&CodeKey::email(7)).await.unwrap().expect("code stored");
    assert_eq!(stored.len(), 8);

    let messages = outbox.messages.lock().unwrap().clone();
    assert_eq!(messages, vec![("ada@example.com".to_string(), stored)]);

    let trail = audit.find_by_user(7, 10).await.unwrap();
    assert_eq!(trail.len(), 1);
    assert_eq!(trail[0].ip_address.as_deref(), Some("192.0.2.10"));
}

#[tokio::test]
async fn test_verified_user_with_noop_audit() {
    let outbox = Arc::new(Outbox::default());

    let service = ResendVerificationService::new(
        Arc::new(users()),
        Arc::new(SecureCodeGenerator::default()),
        Arc::new(InMemoryStore::default()),
        outbox.clone(),
        Arc::new(NoOpAuditLogRepository::new()),
        ResendVerificationConfig::default(),
    );

    let outcome = service
        .execute(
            &ResendVerificationCommand::new(8),
            &RequestContext::default(),
            &CallContext::new(),
        )
        .await
        .unwrap();

    assert_eq!(outcome.status, ResendStatus::AlreadyVerified);
    assert!(outbox.messages.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_delivery_failure_maps_to_error_response() {
    let service = ResendVerificationService::new(
        Arc::new(users()),
        Arc::new(SecureCodeGenerator::numeric()),
        Arc::new(InMemoryStore::default()),
        Arc::new(Outbox {
            fail: true,
            ..Outbox::default()
        }),
        Arc::new(NoOpAuditLogRepository::new()),
        ResendVerificationConfig::default(),
    );

    let error = service
        .execute(
            &ResendVerificationCommand::new(7),
            &RequestContext::default(),
            &CallContext::new(),
        )
        .await
        .unwrap_err();

    assert!(matches!(error, ResendError::DeliveryFailed { .. }));

    let response = error.to_error_response();
    assert_eq!(response.error, "EMAIL_SEND_FAILED");
    assert_eq!(response.status.http_status(), 502);
    assert!(response.retryable);
    assert!(!response.message.contains("mailbox unavailable"));
}
