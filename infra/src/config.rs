//! Configuration loading
//!
//! Layers, lowest priority first:
//! 1. `AppConfig::from_env()` (environment preset plus the plain `DATABASE_URL`,
//!    `REDIS_URL`, `VERIFICATION_*` style variables)
//! 2. the per-environment file (`config.development.toml`, ...), if present
//! 3. `VERICODE__SECTION__FIELD` variables

use ::config::{Config, File};
use vc_shared::config::AppConfig;

use crate::InfrastructureError;

/// Prefix of the nested override variables
pub const ENV_PREFIX: &str = "VERICODE";

/// Load the application configuration
///
/// A `.env` file in the working directory is loaded first when present.
pub fn load_config() -> Result<AppConfig, InfrastructureError> {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env file"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "Failed to read .env file"),
    }

    let base = AppConfig::from_env();
    let file = base.environment.config_file().to_string();
    let config = layered(base, &file)?;

    tracing::info!(
        environment = %config.environment,
        cache_type = ?config.cache.cache_type,
        "Configuration loaded"
    );
    Ok(config)
}

/// Merge `base` with an optional config file and prefixed overrides
pub fn layered(base: AppConfig, file: &str) -> Result<AppConfig, InfrastructureError> {
    let settings = Config::builder()
        .add_source(Config::try_from(&base)?)
        .add_source(File::with_name(file).required(false))
        .add_source(
            ::config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vc_shared::config::CacheType;

    #[test]
    fn test_layered_without_overrides_keeps_base() {
        let base = AppConfig::development();

        let config = layered(base, "does-not-exist.toml").unwrap();

        assert_eq!(config.cache.cache_type, CacheType::Memory);
        assert_eq!(config.verification.code_ttl_minutes, 15);
        assert_eq!(config.logging.level, "debug");
    }
}
