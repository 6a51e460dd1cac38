//! User repository trait defining the read-only lookup used by the core.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User lookups
///
/// The identity store owns user records; the core only reads them.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by ID
    ///
    /// # Returns
    /// * `Ok(Some(User))` if found
    /// * `Ok(None)` if not found
    /// * `Err(DomainError)` if the lookup fails
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;
}
