//! Audit log repository trait defining the interface for audit log persistence.

use async_trait::async_trait;

use crate::domain::entities::audit::AuditLog;
use crate::errors::DomainError;

/// Repository trait for append-only audit log persistence
///
/// Callers treat writes as best-effort; a failed append must never fail the
/// operation being audited.
#[async_trait]
pub trait AuditLogRepository: Send + Sync {
    /// Append a new audit log entry
    async fn create(&self, audit_log: &AuditLog) -> Result<(), DomainError>;

    /// Find audit logs by user ID
    ///
    /// # Returns
    /// * List of audit logs for the user, ordered by created_at descending
    async fn find_by_user(&self, user_id: i64, limit: usize) -> Result<Vec<AuditLog>, DomainError>;
}
