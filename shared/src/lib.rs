//! Shared utilities and common types for Vericode services
//!
//! This crate provides common functionality used across all workspace crates:
//! - Configuration types
//! - Error response structures and error codes
//! - Email address utilities (validation, masking)

pub mod config;
pub mod errors;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, CacheConfig, CacheStrategyConfig, CacheType, DatabaseConfig, Environment,
    LogFormat, LoggingConfig, MemoryCacheConfig, VerificationConfig,
};
pub use errors::{error_codes, ApiResult, ErrorResponse, IntoErrorResponse, StatusClass};
pub use utils::email;
