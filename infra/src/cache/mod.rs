//! Verification code stores
//!
//! Redis backs codes in deployed environments; the in-memory store serves
//! development and tests. Both replace on write and expire entries on their own.

pub mod memory_code_store;
pub mod redis_client;
pub mod redis_code_store;


use std::sync::Arc;

use vc_core::services::VerificationCodeStore;
use vc_shared::config::{CacheStrategyConfig, CacheType};

use crate::InfrastructureError;

pub use memory_code_store::InMemoryVerificationCodeStore;
pub use redis_client::RedisClient;
pub use redis_code_store::RedisVerificationCodeStore;

// Re-export commonly used types
pub use vc_shared::config::CacheConfig;

/// Build the code store selected by `config.cache_type`
pub async fn create_verification_code_store(
    config: &CacheStrategyConfig,
) -> Result<Arc<dyn VerificationCodeStore>, InfrastructureError> {
    match config.cache_type {
        CacheType::Redis => {
            let client = RedisClient::new(config.redis.clone()).await?;
            tracing::info!("Using Redis verification code store");
            Ok(Arc::new(RedisVerificationCodeStore::new(client)))
        }
        CacheType::Memory => {
            tracing::info!(
                max_entries = config.memory.max_entries,
                "Using in-memory verification code store"
            );
            Ok(Arc::new(InMemoryVerificationCodeStore::new(&config.memory)))
        }
    }
}
