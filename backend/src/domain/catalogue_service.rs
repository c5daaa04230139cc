//! Catalogue read service.
//!
//! Implements [`CatalogueQuery`] over a [`CatalogueRepository`]. Author and
//! title lookups are derived by scanning one consistent snapshot of the
//! store; no secondary structure is maintained.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{CatalogueQuery, CatalogueRepository, CatalogueRepositoryError};
use crate::domain::{BookId, BookListing, BookRecord, Error, ReadDeferral};

pub(crate) fn map_catalogue_error(error: CatalogueRepositoryError) -> Error {
    match error {
        CatalogueRepositoryError::MissingBook { isbn } => {
            Error::not_found(format!("book {isbn} not found"))
        }
        CatalogueRepositoryError::MissingReview { isbn, reviewer } => {
            Error::review_not_found(format!("no review by {reviewer} on book {isbn}"))
        }
        CatalogueRepositoryError::Unavailable { message } => {
            Error::internal(format!("catalogue store error: {message}"))
        }
    }
}

/// Book field a secondary lookup matches on.
#[derive(Debug, Clone, Copy)]
enum LookupField {
    Author,
    Title,
}

impl LookupField {
    fn value(self, book: &BookRecord) -> &str {
        match self {
            Self::Author => book.author(),
            Self::Title => book.title(),
        }
    }

    fn no_matches(self, wanted: &str) -> Error {
        match self {
            Self::Author => Error::not_found(format!("no books found for author {wanted}")),
            Self::Title => Error::not_found(format!("no books found with title {wanted}")),
        }
    }
}

/// Every record whose `field` equals `wanted`, in catalogue order.
///
/// An empty result is `NotFound`; callers rely on that asymmetry with the
/// full listing.
fn scan(listing: BookListing, field: LookupField, wanted: &str) -> Result<BookListing, Error> {
    let matches: BookListing = listing
        .into_iter()
        .filter(|(_, book)| field.value(book) == wanted)
        .collect();
    if matches.is_empty() {
        Err(field.no_matches(wanted))
    } else {
        Ok(matches)
    }
}

/// Catalogue service implementing the read driving port.
#[derive(Clone)]
pub struct CatalogueService<R> {
    catalogue: Arc<R>,
    deferral: ReadDeferral,
}

impl<R> CatalogueService<R> {
    /// Create a service over `catalogue` resolving reads with `deferral`.
    pub fn new(catalogue: Arc<R>, deferral: ReadDeferral) -> Self {
        Self {
            catalogue,
            deferral,
        }
    }
}

impl<R> CatalogueService<R>
where
    R: CatalogueRepository + 'static,
{
    async fn lookup(&self, field: LookupField, wanted: &str) -> Result<BookListing, Error> {
        let catalogue = Arc::clone(&self.catalogue);
        let wanted = wanted.to_owned();
        self.deferral
            .resolve(async move {
                let listing = catalogue.snapshot().await.map_err(map_catalogue_error)?;
                let matches = scan(listing, field, &wanted)?;
                debug!(?field, value = %wanted, count = matches.len(), "secondary lookup");
                Ok(matches)
            })
            .await
    }
}

#[async_trait]
impl<R> CatalogueQuery for CatalogueService<R>
where
    R: CatalogueRepository + 'static,
{
    async fn all_books(&self) -> Result<BookListing, Error> {
        let catalogue = Arc::clone(&self.catalogue);
        self.deferral
            .resolve(async move { catalogue.snapshot().await.map_err(map_catalogue_error) })
            .await
    }

    async fn book_by_id(&self, isbn: &BookId) -> Result<BookRecord, Error> {
        let catalogue = Arc::clone(&self.catalogue);
        let isbn = isbn.clone();
        self.deferral
            .resolve(async move {
                catalogue
                    .find(&isbn)
                    .await
                    .map_err(map_catalogue_error)?
                    .ok_or_else(|| Error::not_found(format!("book {isbn} not found")))
            })
            .await
    }

    async fn books_by_author(&self, author: &str) -> Result<BookListing, Error> {
        self.lookup(LookupField::Author, author).await
    }

    async fn books_by_title(&self, title: &str) -> Result<BookListing, Error> {
        self.lookup(LookupField::Title, title).await
    }
}

#[cfg(test)]
#[path = "catalogue_service_tests.rs"]
mod tests;
