//! MySQL implementation of the AuditLogRepository trait.
//!
//! Appends to the `audit_logs` table:
//! `id CHAR(36)`, `action VARCHAR`, `user_id BIGINT NULL`, `description TEXT NULL`,
//! `ip_address VARCHAR NULL`, `user_agent VARCHAR NULL`, `route VARCHAR NULL`,
//! `method VARCHAR NULL`, `status_code SMALLINT UNSIGNED NULL`, `created_at`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use vc_core::domain::entities::audit::AuditLog;
use vc_core::errors::DomainError;
use vc_core::repositories::AuditLogRepository;

/// MySQL implementation of AuditLogRepository
pub struct MySqlAuditLogRepository {
    pool: MySqlPool,
}

impl MySqlAuditLogRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_audit_log(row: &sqlx::mysql::MySqlRow) -> Result<AuditLog, DomainError> {
        fn column<'r, T>(row: &'r sqlx::mysql::MySqlRow, name: &str) -> Result<T, DomainError>
        where
            T: sqlx::Decode<'r, sqlx::MySql> + sqlx::Type<sqlx::MySql>,
        {
            row.try_get(name).map_err(|e| DomainError::Internal {
                message: format!("Failed to get {}: {}", name, e),
            })
        }

        let id: String = column(row, "id")?;

        Ok(AuditLog {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Internal {
                message: format!("Invalid UUID: {}", e),
            })?,
            action: column(row, "action")?,
            user_id: column(row, "user_id")?,
            description: column(row, "description")?,
            ip_address: column(row, "ip_address")?,
            user_agent: column(row, "user_agent")?,
            route: column(row, "route")?,
            method: column(row, "method")?,
            status_code: column(row, "status_code")?,
            created_at: column::<DateTime<Utc>>(row, "created_at")?,
        })
    }
}

#[async_trait]
impl AuditLogRepository for MySqlAuditLogRepository {
    async fn create(&self, audit_log: &AuditLog) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO audit_logs (
                id, action, user_id, description, ip_address,
                user_agent, route, method, status_code, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(audit_log.id.to_string())
            .bind(&audit_log.action)
            .bind(audit_log.user_id)
            .bind(&audit_log.description)
            .bind(&audit_log.ip_address)
            .bind(&audit_log.user_agent)
            .bind(&audit_log.route)
            .bind(&audit_log.method)
            .bind(audit_log.status_code)
            .bind(audit_log.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Failed to create audit log: {}", e)))?;

        Ok(())
    }

    async fn find_by_user(&self, user_id: i64, limit: usize) -> Result<Vec<AuditLog>, DomainError> {
        let query = r#"
            SELECT id, action, user_id, description, ip_address,
                   user_agent, route, method, status_code, created_at
            FROM audit_logs
            WHERE user_id = ?
            ORDER BY created_at DESC
            LIMIT ?
        "#;

        let rows = sqlx::query(query)
            .bind(user_id)
            .bind(limit as u64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Failed to find audit logs by user: {}", e)))?;

        rows.iter().map(Self::row_to_audit_log).collect()
    }
}
