//! Domain-specific error types and error handling.

mod resend;

pub use resend::{ResendError, WorkflowStage};

use thiserror::Error;

/// Core domain errors reported by collaborators (repositories, stores, notifiers)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Database error: {0}")]
    Database(String),

    #[error("Cache error: {0}")]
    Cache(String),

    #[error("Notification error: {0}")]
    Notification(String),

    #[error("Internal error: {message}")]
    Internal { message: String },
}

#[cfg(test)]
mod tests;
