//! No-op implementation of AuditLogRepository for when audit logging is not needed

use async_trait::async_trait;

use super::AuditLogRepository;
use crate::domain::entities::audit::AuditLog;
use crate::errors::DomainError;

/// No-op implementation of AuditLogRepository
///
/// Used by deployments without an audit store.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpAuditLogRepository;

impl NoOpAuditLogRepository {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AuditLogRepository for NoOpAuditLogRepository {
    async fn create(&self, _audit_log: &AuditLog) -> Result<(), DomainError> {
        Ok(())
    }

    async fn find_by_user(&self, _user_id: i64, _limit: usize) -> Result<Vec<AuditLog>, DomainError> {
        Ok(Vec::new())
    }
}
