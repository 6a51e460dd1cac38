//! # Infrastructure Layer
//!
//! Concrete implementations of the core's capability interfaces:
//!
//! - **Cache**: Redis and in-memory verification code stores
//! - **Database**: MySQL user and audit log repositories using SQLx
//! - **Email**: development notifier that logs masked deliveries
//! - **Telemetry**: `tracing` subscriber installation
//! - **Configuration**: `.env` + file + environment layered loading
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

// Re-export core types for convenience
pub use vc_core::errors::*;

/// Cache module - verification code stores
pub mod cache;

/// Configuration loading
pub mod config;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Email delivery implementations
pub mod email;

/// Process-wide tracing setup
pub mod telemetry;

pub use config::load_config;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Telemetry setup error
    #[error("Telemetry error: {0}")]
    Telemetry(String),
}

impl From<::config::ConfigError> for InfrastructureError {
    fn from(error: ::config::ConfigError) -> Self {
        InfrastructureError::Config(error.to_string())
    }
}

impl From<InfrastructureError> for DomainError {
    fn from(error: InfrastructureError) -> Self {
        match error {
            InfrastructureError::Database(e) => DomainError::Database(e.to_string()),
            InfrastructureError::Cache(e) => DomainError::Cache(e.to_string()),
            other => DomainError::Internal {
                message: other.to_string(),
            },
        }
    }
}
