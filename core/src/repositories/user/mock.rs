//! Mock implementation of UserRepository for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::entities::user::User;
use crate::errors::DomainError;

use super::UserRepository;

/// In-memory user directory with a failure switch and call counter
#[derive(Clone, Default)]
pub struct MockUserRepository {
    users: Arc<Mutex<HashMap<i64, User>>>,
    should_fail: Arc<Mutex<bool>>,
    lookups: Arc<Mutex<usize>>,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed or replace a user record
    pub fn insert(&self, user: User) {
        self.users.lock().unwrap().insert(user.id, user);
    }

    pub fn with_user(self, user: User) -> Self {
        self.insert(user);
        self
    }

    /// Set whether lookups should fail
    pub fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.lock().unwrap() = should_fail;
    }

    /// Number of lookups performed so far
    pub fn lookup_count(&self) -> usize {
        *self.lookups.lock().unwrap()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        *self.lookups.lock().unwrap() += 1;

        if *self.should_fail.lock().unwrap() {
            return Err(DomainError::Database("Mock repository error".to_string()));
        }

        Ok(self.users.lock().unwrap().get(&id).cloned())
    }
}
