//! In-memory catalogue store.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use tracing::warn;

use crate::domain::ports::{CatalogueRepository, CatalogueRepositoryError};
use crate::domain::{BookId, BookListing, BookRecord, ReviewOutcome, ReviewText, Username};

/// Catalogue held in process memory, keyed by identifier in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryCatalogue {
    books: RwLock<BookListing>,
}

impl InMemoryCatalogue {
    /// Build a store holding `books` in the given order.
    ///
    /// A repeated identifier keeps its first position and the last record.
    pub fn from_books(books: impl IntoIterator<Item = BookRecord>) -> Self {
        let mut listing = BookListing::new();
        for book in books {
            let isbn = book.isbn().clone();
            if listing.insert(isbn.clone(), book).is_some() {
                warn!(%isbn, "duplicate book identifier in seed; keeping the later record");
            }
        }
        Self {
            books: RwLock::new(listing),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, BookListing>, CatalogueRepositoryError> {
        self.books
            .read()
            .map_err(|_| CatalogueRepositoryError::unavailable("catalogue lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, BookListing>, CatalogueRepositoryError> {
        self.books
            .write()
            .map_err(|_| CatalogueRepositoryError::unavailable("catalogue lock poisoned"))
    }
}

#[async_trait]
impl CatalogueRepository for InMemoryCatalogue {
    async fn snapshot(&self) -> Result<BookListing, CatalogueRepositoryError> {
        Ok(self.read()?.clone())
    }

    async fn find(&self, isbn: &BookId) -> Result<Option<BookRecord>, CatalogueRepositoryError> {
        Ok(self.read()?.get(isbn).cloned())
    }

    async fn put_review(
        &self,
        isbn: &BookId,
        reviewer: &Username,
        text: &ReviewText,
    ) -> Result<ReviewOutcome, CatalogueRepositoryError> {
        let mut books = self.write()?;
        let book = books
            .get_mut(isbn)
            .ok_or_else(|| CatalogueRepositoryError::missing_book(isbn.as_ref()))?;
        Ok(book.reviews_mut().upsert(reviewer.clone(), text.clone()))
    }

    async fn remove_review(
        &self,
        isbn: &BookId,
        reviewer: &Username,
    ) -> Result<ReviewText, CatalogueRepositoryError> {
        let mut books = self.write()?;
        let book = books
            .get_mut(isbn)
            .ok_or_else(|| CatalogueRepositoryError::missing_book(isbn.as_ref()))?;
        book.reviews_mut().remove(reviewer).ok_or_else(|| {
            CatalogueRepositoryError::missing_review(isbn.as_ref(), reviewer.as_ref())
        })
    }
}
