//! Seam for credential storage and comparison.
//!
//! The registry never compares secrets itself. Swapping the plaintext
//! implementation for a hashing one changes how credentials are sealed and
//! checked without touching the registry's contract.

use crate::domain::StoredCredential;

/// Seals credentials at registration and checks them at login.
#[cfg_attr(test, mockall::automock)]
pub trait CredentialVerifier: Send + Sync {
    /// Produce the stored form of a newly registered password.
    fn seal(&self, password: &str) -> StoredCredential;

    /// Whether `presented` matches the credential recorded at registration.
    fn verify(&self, stored: &StoredCredential, presented: &str) -> bool;
}

/// Stores passwords as given and compares them verbatim.
///
/// Password hashing is out of scope for this service; keep this behind the
/// [`CredentialVerifier`] seam.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaintextCredentialVerifier;

impl CredentialVerifier for PlaintextCredentialVerifier {
    fn seal(&self, password: &str) -> StoredCredential {
        StoredCredential::new(password)
    }

    fn verify(&self, stored: &StoredCredential, presented: &str) -> bool {
        stored.expose() == presented
    }
}
