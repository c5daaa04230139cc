//! Driving port for the user registry.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, Username};

/// Domain use-case port for registering and checking users.
#[async_trait]
pub trait UserRegistry: Send + Sync {
    /// Register a new account; `Conflict` when the username is taken.
    async fn register(&self, credentials: &LoginCredentials) -> Result<(), Error>;

    /// Whether an account exists under exactly `username`.
    async fn exists(&self, username: &Username) -> Result<bool, Error>;

    /// Whether `credentials` match a registered account exactly.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<bool, Error>;
}

/// Username always reported as registered by [`FixtureUserRegistry`].
pub(crate) const FIXTURE_USERNAME: &str = "alice";
/// Password accepted for [`FIXTURE_USERNAME`] by the fixtures.
pub(crate) const FIXTURE_PASSWORD: &str = "password";

/// Registry with one pre-registered user, `alice` / `password`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserRegistry;

#[async_trait]
impl UserRegistry for FixtureUserRegistry {
    async fn register(&self, credentials: &LoginCredentials) -> Result<(), Error> {
        if credentials.username().as_ref() == FIXTURE_USERNAME {
            Err(Error::conflict("username already exists"))
        } else {
            Ok(())
        }
    }

    async fn exists(&self, username: &Username) -> Result<bool, Error> {
        Ok(username.as_ref() == FIXTURE_USERNAME)
    }

    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<bool, Error> {
        Ok(credentials.username().as_ref() == FIXTURE_USERNAME
            && credentials.password() == FIXTURE_PASSWORD)
    }
}
