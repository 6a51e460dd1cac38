pub mod audit;
pub mod user;

pub use audit::{AuditLogRepository, NoOpAuditLogRepository};
pub use user::UserRepository;

#[cfg(test)]
pub use audit::MockAuditLogRepository;
#[cfg(test)]
pub use user::MockUserRepository;
