//! Domain primitives, ports and services for the book catalogue.
//!
//! Purpose: define strongly typed entities and the use-case services that
//! inbound adapters call through the ports in [`ports`]. Nothing here knows
//! about HTTP or any storage technology.
//!
//! Public surface:
//! - `BookRecord`, `BookId`, `BookListing`: catalogue entries.
//! - `ReviewMap`, `ReviewText`, `ReviewOutcome`: per-book reviews.
//! - `Username`, `UserAccount`, `LoginCredentials`: registry identities.
//! - `CatalogueService`, `ReviewService`, `UserRegistryService`: services
//!   implementing the driving ports.
//! - `ReadDeferral`: deferred resolution of catalogue reads.
//! - `Error`, `ErrorCode`: transport-agnostic failures.

pub mod auth;
pub mod book;
pub mod catalogue_service;
pub mod deferred;
pub mod error;
pub mod ports;
pub mod review;
pub mod review_service;
pub mod seed;
pub mod trace_id;
pub mod user;
pub mod user_registry_service;

pub use self::auth::{LoginCredentials, LoginValidationError};
pub use self::book::{BookDraft, BookId, BookListing, BookRecord, BookValidationError};
pub use self::catalogue_service::CatalogueService;
pub use self::deferred::{READ_DEFERRAL, ReadDeferral};
pub use self::error::{Error, ErrorCode};
pub use self::review::{ReviewMap, ReviewOutcome, ReviewText, ReviewValidationError};
pub use self::review_service::ReviewService;
pub use self::seed::{CatalogueSeed, SeedError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{StoredCredential, UserAccount, UserValidationError, Username};
pub use self::user_registry_service::UserRegistryService;
