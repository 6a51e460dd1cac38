//! # Vericode Core
//!
//! Core business logic and domain layer for the Vericode identity services.
//! This crate contains domain entities, the email verification services,
//! repository interfaces, and error types that form the foundation of the
//! application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::{AuditLogRepository, NoOpAuditLogRepository, UserRepository};
pub use services::*;
