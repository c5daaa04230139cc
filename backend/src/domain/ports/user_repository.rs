//! Driven port for registered accounts.
use async_trait::async_trait;

use crate::domain::{UserAccount, Username};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user store adapters.
    pub enum UserRepositoryError {
        /// An account with the same username already exists.
        Duplicate { username: String } => "user {username} is already registered",
        /// The backing store could not be read or written.
        Unavailable { message: String } => "user store unavailable: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Append `account`, rejecting a username that is already taken.
    ///
    /// The uniqueness check and the insert must be one atomic step.
    async fn insert(&self, account: UserAccount) -> Result<(), UserRepositoryError>;

    /// Fetch the account registered under `username`.
    async fn find(&self, username: &Username) -> Result<Option<UserAccount>, UserRepositoryError>;
}
