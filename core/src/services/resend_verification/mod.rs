//! Resend email verification code workflow
//!
//! Re-issues a verification code for an unverified, active user:
//! - looks up the user and short-circuits when the email is already verified
//! - generates a fresh code and stores it with a fixed TTL, replacing any previous code
//! - emails the code and appends a best-effort audit record
//!
//! Every I/O step observes the caller's cancellation token and deadline.

mod config;
mod context;
mod service;
mod types;


pub use config::ResendVerificationConfig;
pub use context::CallContext;
pub use service::ResendVerificationService;
pub use types::{RequestContext, ResendOutcome, ResendStatus, ResendVerificationCommand};
