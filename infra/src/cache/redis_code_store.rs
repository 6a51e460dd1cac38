//! Redis-backed verification code store

use async_trait::async_trait;
use std::time::Duration;

use vc_core::domain::entities::CodeKey;
use vc_core::errors::DomainError;
use vc_core::services::VerificationCodeStore;

use super::RedisClient;

/// Stores codes with `SET key value EX ttl`
///
/// A write replaces the previous code and its expiry in one command, so
/// concurrent writers for the same user resolve last-writer-wins.
#[derive(Clone)]
pub struct RedisVerificationCodeStore {
    client: RedisClient,
}

impl RedisVerificationCodeStore {
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    fn redis_key(&self, key: &CodeKey) -> String {
        self.client.config().make_key(&key.storage_key())
    }

    /// Remaining lifetime of the code stored under `key`
    pub async fn remaining_ttl(&self, key: &CodeKey) -> Result<Option<Duration>, DomainError> {
        let ttl = self.client.ttl(&self.redis_key(key)).await?;
        Ok(ttl.map(|secs| Duration::from_secs(secs as u64)))
    }
}

#[async_trait]
impl VerificationCodeStore for RedisVerificationCodeStore {
    async fn put(&self, key: &CodeKey, code: &str, ttl: Duration) -> Result<(), DomainError> {
        // EX rejects zero; round sub-second TTLs up
        let seconds = ttl.as_secs().max(1);
        self.client
            .set_with_expiry(&self.redis_key(key), code, seconds)
            .await?;
        Ok(())
    }

    async fn get(&self, key: &CodeKey) -> Result<Option<String>, DomainError> {
        Ok(self.client.get(&self.redis_key(key)).await?)
    }
}
