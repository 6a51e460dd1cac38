//! In-process verification code store backed by `moka`

use async_trait::async_trait;
use moka::future::Cache;
use moka::Expiry;
use std::time::{Duration, Instant};

use vc_core::domain::entities::CodeKey;
use vc_core::errors::DomainError;
use vc_core::services::VerificationCodeStore;
use vc_shared::config::MemoryCacheConfig;

#[derive(Clone)]
struct StoredCode {
    code: String,
    ttl: Duration,
}

/// Per-entry expiry: every insert, including a replacement, restarts the clock
struct CodeExpiry;

impl Expiry<String, StoredCode> for CodeExpiry {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &StoredCode,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &StoredCode,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

/// Expiring in-memory code store for development and tests
///
/// Not shared between processes.
#[derive(Clone)]
pub struct InMemoryVerificationCodeStore {
    cache: Cache<String, StoredCode>,
}

impl InMemoryVerificationCodeStore {
    pub fn new(config: &MemoryCacheConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.max_entries)
            .expire_after(CodeExpiry)
            .build();

        Self { cache }
    }

    /// Number of live entries, after pending maintenance runs
    pub async fn len(&self) -> u64 {
        self.cache.run_pending_tasks().await;
        self.cache.entry_count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for InMemoryVerificationCodeStore {
    fn default() -> Self {
        Self::new(&MemoryCacheConfig::default())
    }
}

#[async_trait]
impl VerificationCodeStore for InMemoryVerificationCodeStore {
    async fn put(&self, key: &CodeKey, code: &str, ttl: Duration) -> Result<(), DomainError> {
        self.cache
            .insert(
                key.storage_key(),
                StoredCode {
                    code: code.to_string(),
                    ttl,
                },
            )
            .await;
        tracing::debug!(key = %key, ttl_secs = ttl.as_secs(), "Stored verification code in memory");
        Ok(())
    }

    async fn get(&self, key: &CodeKey) -> Result<Option<String>, DomainError> {
        Ok(self.cache.get(&key.storage_key()).await.map(|stored| stored.code))
    }
}
