//! Driving port for catalogue reads.
//!
//! Every method is a deferred read: it resolves once, later, with either a
//! value or a typed failure.

use async_trait::async_trait;

use crate::domain::{BookDraft, BookId, BookListing, BookRecord, Error, ReviewMap};

/// Domain use-case port for looking up books.
#[async_trait]
pub trait CatalogueQuery: Send + Sync {
    /// Every book in catalogue order. An empty catalogue is a success.
    async fn all_books(&self) -> Result<BookListing, Error>;

    /// Exact identifier lookup; `NotFound` when no record matches.
    async fn book_by_id(&self, isbn: &BookId) -> Result<BookRecord, Error>;

    /// Books whose author equals `author` exactly.
    ///
    /// Zero matches is reported as `NotFound`, unlike [`Self::all_books`].
    async fn books_by_author(&self, author: &str) -> Result<BookListing, Error>;

    /// Books whose title equals `title` exactly.
    ///
    /// Zero matches is reported as `NotFound`, unlike [`Self::all_books`].
    async fn books_by_title(&self, title: &str) -> Result<BookListing, Error>;
}

pub(crate) const FIXTURE_ISBN: &str = "1";
pub(crate) const FIXTURE_TITLE: &str = "Things Fall Apart";
pub(crate) const FIXTURE_AUTHOR: &str = "Chinua Achebe";

fn fixture_book() -> Result<BookRecord, Error> {
    let isbn = BookId::new(FIXTURE_ISBN)
        .map_err(|err| Error::internal(format!("invalid fixture isbn: {err}")))?;
    BookRecord::new(BookDraft {
        isbn,
        title: FIXTURE_TITLE.to_owned(),
        author: FIXTURE_AUTHOR.to_owned(),
        description: None,
        reviews: ReviewMap::default(),
    })
    .map_err(|err| Error::internal(format!("invalid fixture book: {err}")))
}

fn fixture_listing() -> Result<BookListing, Error> {
    let book = fixture_book()?;
    Ok(BookListing::from_iter([(book.isbn().clone(), book)]))
}

/// Single-book catalogue for handler tests that do not need a store.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCatalogueQuery;

#[async_trait]
impl CatalogueQuery for FixtureCatalogueQuery {
    async fn all_books(&self) -> Result<BookListing, Error> {
        fixture_listing()
    }

    async fn book_by_id(&self, isbn: &BookId) -> Result<BookRecord, Error> {
        if isbn.as_ref() == FIXTURE_ISBN {
            fixture_book()
        } else {
            Err(Error::not_found(format!("book {isbn} not found")))
        }
    }

    async fn books_by_author(&self, author: &str) -> Result<BookListing, Error> {
        if author == FIXTURE_AUTHOR {
            fixture_listing()
        } else {
            Err(Error::not_found(format!("no books found for author {author}")))
        }
    }

    async fn books_by_title(&self, title: &str) -> Result<BookListing, Error> {
        if title == FIXTURE_TITLE {
            fixture_listing()
        } else {
            Err(Error::not_found(format!("no books found with title {title}")))
        }
    }
}
