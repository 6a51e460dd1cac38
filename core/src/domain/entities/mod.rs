//! Domain entities representing core business objects.

pub mod audit;
pub mod user;
pub mod verification_code;


// Re-export commonly used types
pub use audit::{actions, AuditLog};
pub use user::{AccountStatus, User};
pub use verification_code::{
    CodeKey, CodePurpose, IssuedCode, DEFAULT_CODE_LENGTH, DEFAULT_CODE_TTL_MINUTES,
};
