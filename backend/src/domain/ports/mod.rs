//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports (`CatalogueQuery`, `ReviewQuery`, `ReviewCommand`,
//! `UserRegistry`, `LoginService`) are what inbound adapters call. Driven
//! ports (`CatalogueRepository`, `UserRepository`, `CredentialVerifier`) are
//! what the domain services need from outbound adapters; they expose
//! strongly typed errors instead of `anyhow::Result`.

mod macros;
pub(crate) use macros::define_port_error;

mod catalogue_query;
mod catalogue_repository;
mod credential_verifier;
mod login_service;
mod review_command;
mod review_query;
mod user_registry;
mod user_repository;

pub use catalogue_query::{CatalogueQuery, FixtureCatalogueQuery};
#[cfg(test)]
pub use catalogue_repository::MockCatalogueRepository;
pub use catalogue_repository::{CatalogueRepository, CatalogueRepositoryError};
#[cfg(test)]
pub use credential_verifier::MockCredentialVerifier;
pub use credential_verifier::{CredentialVerifier, PlaintextCredentialVerifier};
pub use login_service::{FixtureLoginService, LoginService};
pub use review_command::{FixtureReviewCommand, ReviewCommand};
pub use review_query::{FixtureReviewQuery, ReviewQuery};
pub use user_registry::{FixtureUserRegistry, UserRegistry};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
