//! Driving port for login.
//!
//! Inbound adapters call this to turn presented credentials into the
//! identity they store in the caller's session. Handler tests substitute
//! [`FixtureLoginService`] instead of wiring a registry.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, Username};

use super::user_registry::{FIXTURE_PASSWORD, FIXTURE_USERNAME};

/// Domain use-case port for authentication.
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the authenticated identity.
    async fn login(&self, credentials: &LoginCredentials) -> Result<Username, Error>;
}

/// Fixture authenticator accepting `alice` / `password`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureLoginService;

#[async_trait]
impl LoginService for FixtureLoginService {
    async fn login(&self, credentials: &LoginCredentials) -> Result<Username, Error> {
        if credentials.username().as_ref() == FIXTURE_USERNAME
            && credentials.password() == FIXTURE_PASSWORD
        {
            Ok(credentials.username().clone())
        } else {
            Err(Error::unauthorized("invalid username or password"))
        }
    }
}
