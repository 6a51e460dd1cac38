//! Database module - MySQL implementations using SQLx
//!
//! - Connection pool management
//! - User lookup and audit log repositories

pub mod connection;
pub mod mysql;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use mysql::{MySqlAuditLogRepository, MySqlUserRepository};
