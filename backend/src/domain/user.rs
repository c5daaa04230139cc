//! User identities and registered accounts.

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

/// Validation errors returned by [`Username::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    /// Username was the empty string.
    EmptyUsername,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "username must not be empty"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Registered identity and reviewer key.
///
/// ## Invariants
/// - Must not be the empty string. Whitespace is significant.
/// - Compared exactly: no trimming, no case folding. `"Alice"` and
///   `"alice"` are different users.
///
/// # Examples
/// ```
/// use bookshelf::domain::Username;
///
/// let alice = Username::new("alice").expect("valid username");
/// assert_ne!(alice, Username::new("Alice").expect("valid username"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Validate and construct a [`Username`].
    pub fn new(raw: impl Into<String>) -> Result<Self, UserValidationError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(UserValidationError::EmptyUsername);
        }
        Ok(Self(raw))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl TryFrom<String> for Username {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Credential as stored by the registry.
///
/// Opaque to everything except a
/// [`CredentialVerifier`](crate::domain::ports::CredentialVerifier).
#[derive(Clone, PartialEq, Eq)]
pub struct StoredCredential(Zeroizing<String>);

impl StoredCredential {
    /// Wrap a credential for storage.
    pub fn new(secret: impl Into<String>) -> Self {
        Self(Zeroizing::new(secret.into()))
    }

    /// Expose the stored form to a verifier.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for StoredCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StoredCredential(..)")
    }
}

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccount {
    username: Username,
    credential: StoredCredential,
}

impl UserAccount {
    /// Create an account from its parts.
    pub fn new(username: Username, credential: StoredCredential) -> Self {
        Self {
            username,
            credential,
        }
    }

    /// Identity of the account.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Credential recorded at registration.
    pub fn credential(&self) -> &StoredCredential {
        &self.credential
    }
}
