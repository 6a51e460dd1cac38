//! MySQL repository integration tests
//!
//! Require `DATABASE_URL` pointing at a database with the `users` and
//! `audit_logs` tables: `cargo test -p vc_infra -- --ignored`

use vc_core::domain::entities::{actions, AuditLog};
use vc_core::repositories::{AuditLogRepository, UserRepository};
use vc_infra::database::{DatabasePool, MySqlAuditLogRepository, MySqlUserRepository};
use vc_shared::config::DatabaseConfig;

#[tokio::test]
#[ignore] // Requires MySQL with the users and audit_logs tables
async fn test_audit_log_round_trip() -> anyhow::Result<()> {
    let pool = DatabasePool::new(&DatabaseConfig::from_env()).await?;
    let repo = MySqlAuditLogRepository::new(pool.get_pool().clone());

    let user_id = 910_000 + (chrono::Utc::now().timestamp() % 10_000);
    let log = AuditLog::new(actions::EMAIL_VERIFICATION_RESENT)
        .with_user(user_id)
        .with_description("Verification code resent")
        .with_request("203.0.113.5", "integration", "/auth/resend-verification", "POST", 200);

    repo.create(&log).await?;

    let found = repo.find_by_user(user_id, 5).await?;
    assert!(found.iter().any(|entry| entry.id == log.id && entry.status_code == Some(200)));
    Ok(())
}

#[tokio::test]
#[ignore] // Requires MySQL with the users and audit_logs tables
async fn test_unknown_user_is_none() -> anyhow::Result<()> {
    let pool = DatabasePool::new(&DatabaseConfig::from_env()).await?;
    let repo = MySqlUserRepository::new(pool.get_pool().clone());

    assert!(repo.find_by_id(i64::MAX).await?.is_none());
    Ok(())
}
