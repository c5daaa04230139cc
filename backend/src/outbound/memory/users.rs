//! In-memory user registry store.

use std::sync::RwLock;

use async_trait::async_trait;
use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{UserAccount, Username};

/// Registered accounts held in process memory.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    accounts: RwLock<IndexMap<Username, UserAccount>>,
}

impl InMemoryUserRepository {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> UserRepositoryError {
    UserRepositoryError::unavailable("user registry lock poisoned")
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, account: UserAccount) -> Result<(), UserRepositoryError> {
        let mut accounts = self.accounts.write().map_err(|_| poisoned())?;
        match accounts.entry(account.username().clone()) {
            Entry::Occupied(existing) => Err(UserRepositoryError::duplicate(existing.key().as_ref())),
            Entry::Vacant(slot) => {
                slot.insert(account);
                Ok(())
            }
        }
    }

    async fn find(&self, username: &Username) -> Result<Option<UserAccount>, UserRepositoryError> {
        let accounts = self.accounts.read().map_err(|_| poisoned())?;
        Ok(accounts.get(username).cloned())
    }
}
