//! Application services.

pub mod resend_verification;
pub mod verification;

pub use resend_verification::{
    CallContext, RequestContext, ResendOutcome, ResendStatus, ResendVerificationCommand,
    ResendVerificationConfig, ResendVerificationService,
};
pub use verification::{
    CodeAlphabet, CodeGenerator, EmailNotifier, SecureCodeGenerator, VerificationCodeStore,
};
