//! Configuration for the resend verification service

use std::time::Duration;

use vc_shared::config::VerificationConfig;

use crate::domain::entities::verification_code::DEFAULT_CODE_TTL_MINUTES;

/// Route label recorded in audit entries
pub const RESEND_ROUTE: &str = "/auth/resend-verification";
/// Method label recorded in audit entries
pub const RESEND_METHOD: &str = "POST";

/// Configuration for the resend verification service
#[derive(Debug, Clone)]
pub struct ResendVerificationConfig {
    /// Lifetime of a freshly stored code
    pub code_ttl: Duration,
    /// Deadline applied when the caller supplies none
    pub default_deadline: Duration,
    /// Upper bound for the best-effort audit append
    pub audit_timeout: Duration,
    pub audit_route: String,
    pub audit_method: String,
}

impl Default for ResendVerificationConfig {
    fn default() -> Self {
        Self {
            code_ttl: Duration::from_secs(DEFAULT_CODE_TTL_MINUTES * 60),
            default_deadline: Duration::from_secs(30),
            audit_timeout: Duration::from_secs(2),
            audit_route: RESEND_ROUTE.to_string(),
            audit_method: RESEND_METHOD.to_string(),
        }
    }
}

impl From<&VerificationConfig> for ResendVerificationConfig {
    fn from(config: &VerificationConfig) -> Self {
        Self {
            code_ttl: Duration::from_secs(config.code_ttl_minutes.saturating_mul(60)),
            default_deadline: Duration::from_secs(config.request_timeout_secs),
            audit_timeout: Duration::from_millis(config.audit_timeout_ms),
            ..Self::default()
        }
    }
}
