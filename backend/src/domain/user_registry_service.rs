//! User registry service.
//!
//! Implements registration, existence checks and credential checks over a
//! [`UserRepository`]. Credential sealing and comparison are delegated to a
//! [`CredentialVerifier`] so stronger storage can be swapped in without
//! changing this contract.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::ports::{
    CredentialVerifier, LoginService, UserRegistry, UserRepository, UserRepositoryError,
};
use crate::domain::{Error, LoginCredentials, UserAccount, Username};

fn map_user_repository_error(error: UserRepositoryError) -> Error {
    match error {
        UserRepositoryError::Duplicate { .. } => Error::conflict("username already exists"),
        UserRepositoryError::Unavailable { message } => {
            Error::internal(format!("user store error: {message}"))
        }
    }
}

/// Registry service implementing the registration and login driving ports.
#[derive(Clone)]
pub struct UserRegistryService<R, V> {
    users: Arc<R>,
    verifier: Arc<V>,
}

impl<R, V> UserRegistryService<R, V> {
    /// Create a service storing accounts in `users` and checking credentials
    /// with `verifier`.
    pub fn new(users: Arc<R>, verifier: Arc<V>) -> Self {
        Self { users, verifier }
    }
}

#[async_trait]
impl<R, V> UserRegistry for UserRegistryService<R, V>
where
    R: UserRepository,
    V: CredentialVerifier,
{
    async fn register(&self, credentials: &LoginCredentials) -> Result<(), Error> {
        let account = UserAccount::new(
            credentials.username().clone(),
            self.verifier.seal(credentials.password()),
        );
        self.users
            .insert(account)
            .await
            .map_err(map_user_repository_error)?;
        info!(username = %credentials.username(), "user registered");
        Ok(())
    }

    async fn exists(&self, username: &Username) -> Result<bool, Error> {
        let account = self
            .users
            .find(username)
            .await
            .map_err(map_user_repository_error)?;
        Ok(account.is_some())
    }

    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<bool, Error> {
        let account = self
            .users
            .find(credentials.username())
            .await
            .map_err(map_user_repository_error)?;
        Ok(account.is_some_and(|account| {
            self.verifier
                .verify(account.credential(), credentials.password())
        }))
    }
}

#[async_trait]
impl<R, V> LoginService for UserRegistryService<R, V>
where
    R: UserRepository,
    V: CredentialVerifier,
{
    async fn login(&self, credentials: &LoginCredentials) -> Result<Username, Error> {
        if self.authenticate(credentials).await? {
            info!(username = %credentials.username(), "login succeeded");
            Ok(credentials.username().clone())
        } else {
            warn!(username = %credentials.username(), "login rejected");
            Err(Error::unauthorized("invalid username or password"))
        }
    }
}

#[cfg(test)]
#[path = "user_registry_service_tests.rs"]
mod tests;
