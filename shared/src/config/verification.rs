//! Verification code policy configuration

use serde::{Deserialize, Serialize};

/// Policy knobs for issuing email verification codes
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerificationConfig {
    /// Minutes a freshly issued code stays redeemable
    #[serde(default = "default_code_ttl_minutes")]
    pub code_ttl_minutes: u64,

    /// Number of symbols in a generated code
    #[serde(default = "default_code_length")]
    pub code_length: usize,

    /// Deadline applied to a resend request when the caller supplies none
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Upper bound for the best-effort audit append
    #[serde(default = "default_audit_timeout_ms")]
    pub audit_timeout_ms: u64,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            code_ttl_minutes: default_code_ttl_minutes(),
            code_length: default_code_length(),
            request_timeout_secs: default_request_timeout_secs(),
            audit_timeout_ms: default_audit_timeout_ms(),
        }
    }
}

impl VerificationConfig {
    /// Create from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        fn var_or<T: std::str::FromStr>(name: &str, fallback: T) -> T {
            std::env::var(name)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(fallback)
        }

        Self {
            code_ttl_minutes: var_or("VERIFICATION_CODE_TTL_MINUTES", default_code_ttl_minutes()),
            code_length: var_or("VERIFICATION_CODE_LENGTH", default_code_length()),
            request_timeout_secs: var_or(
                "VERIFICATION_REQUEST_TIMEOUT_SECS",
                default_request_timeout_secs(),
            ),
            audit_timeout_ms: var_or("VERIFICATION_AUDIT_TIMEOUT_MS", default_audit_timeout_ms()),
        }
    }
}

fn default_code_ttl_minutes() -> u64 {
    15
}

fn default_code_length() -> usize {
    8
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_audit_timeout_ms() -> u64 {
    2000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = VerificationConfig::default();
        assert_eq!(config.code_ttl_minutes, 15);
        assert_eq!(config.code_length, 8);
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_partial_deserialization_uses_defaults() {
        let config: VerificationConfig = serde_json::from_str(r#"{"code_ttl_minutes": 5}"#).unwrap();
        assert_eq!(config.code_ttl_minutes, 5);
        assert_eq!(config.audit_timeout_ms, 2000);
    }
}
