//! Driven port for the keyed book store.
//!
//! The store owns every [`BookRecord`] and its embedded reviews. Review
//! mutations are single port calls so an adapter can apply the existence
//! check and the write under one lock; readers never observe a half-written
//! review map.

use async_trait::async_trait;

use crate::domain::{BookId, BookListing, BookRecord, ReviewOutcome, ReviewText, Username};

use super::define_port_error;

define_port_error! {
    /// Errors raised by catalogue store adapters.
    pub enum CatalogueRepositoryError {
        /// No record has the requested identifier.
        MissingBook { isbn: String } => "book {isbn} is not in the catalogue",
        /// The book exists but the reviewer has no review on it.
        MissingReview { isbn: String, reviewer: String } =>
            "no review by {reviewer} on book {isbn}",
        /// The backing store could not be read or written.
        Unavailable { message: String } => "catalogue store unavailable: {message}",
    }
}

/// Port for reading and mutating the catalogue.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogueRepository: Send + Sync {
    /// Copy of every record in insertion order, taken under one read.
    ///
    /// An empty catalogue yields an empty listing rather than an error.
    async fn snapshot(&self) -> Result<BookListing, CatalogueRepositoryError>;

    /// Exact-key lookup.
    async fn find(&self, isbn: &BookId) -> Result<Option<BookRecord>, CatalogueRepositoryError>;

    /// Set `reviewer`'s review on `isbn`, replacing any previous text.
    ///
    /// Fails with [`CatalogueRepositoryError::MissingBook`] when `isbn` is
    /// unknown.
    async fn put_review(
        &self,
        isbn: &BookId,
        reviewer: &Username,
        text: &ReviewText,
    ) -> Result<ReviewOutcome, CatalogueRepositoryError>;

    /// Remove `reviewer`'s review on `isbn`, returning the removed text.
    ///
    /// Fails with [`CatalogueRepositoryError::MissingBook`] when `isbn` is
    /// unknown and [`CatalogueRepositoryError::MissingReview`] when the
    /// reviewer has nothing to remove.
    async fn remove_review(
        &self,
        isbn: &BookId,
        reviewer: &Username,
    ) -> Result<ReviewText, CatalogueRepositoryError>;
}
