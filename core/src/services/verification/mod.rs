//! Verification code building blocks
//!
//! Capability interfaces for the code store and the email notifier, plus the
//! secure code generator used when issuing new codes.

mod code_generator;
mod traits;

#[cfg(test)]
mod tests;

pub use code_generator::{CodeAlphabet, CodeGenerator, SecureCodeGenerator};
pub use traits::{EmailNotifier, VerificationCodeStore};
