//! Seed catalogue supplied once at startup.
//!
//! Seed data is a JSON object keyed by book identifier:
//!
//! ```text
//! { "1": { "author": "Chinua Achebe", "title": "Things Fall Apart", "reviews": {} } }
//! ```
//!
//! `description` and `reviews` are optional. Key order becomes catalogue
//! order.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

use super::{BookDraft, BookId, BookRecord, ReviewMap, ReviewText, Username};

const BUILTIN_SEED: &str = include_str!("../../fixtures/books.json");

/// Errors raised while reading seed data.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The document is not the expected JSON shape.
    #[error("seed data is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// An entry failed domain validation.
    #[error("seed entry {isbn:?} is invalid: {message}")]
    Invalid { isbn: String, message: String },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SeedBook {
    author: String,
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    reviews: BTreeMap<String, String>,
}

impl SeedBook {
    fn into_record(self, isbn: String) -> Result<BookRecord, SeedError> {
        let invalid = |message: String| SeedError::Invalid {
            isbn: isbn.clone(),
            message,
        };
        let id = BookId::new(isbn.as_str()).map_err(|err| invalid(err.to_string()))?;
        let reviews = self
            .reviews
            .into_iter()
            .map(|(reviewer, text)| {
                let reviewer = Username::new(reviewer).map_err(|err| invalid(err.to_string()))?;
                let text = ReviewText::new(text).map_err(|err| invalid(err.to_string()))?;
                Ok((reviewer, text))
            })
            .collect::<Result<ReviewMap, SeedError>>()?;
        BookRecord::new(BookDraft {
            isbn: id,
            title: self.title,
            author: self.author,
            description: self.description,
            reviews,
        })
        .map_err(|err| invalid(err.to_string()))
    }
}

/// Validated seed records in document order.
#[derive(Debug, Clone)]
pub struct CatalogueSeed {
    books: Vec<BookRecord>,
}

impl CatalogueSeed {
    /// The ten-book catalogue bundled with the service.
    pub fn builtin() -> Result<Self, SeedError> {
        Self::from_json(BUILTIN_SEED)
    }

    /// Parse and validate a seed document.
    ///
    /// # Examples
    /// ```
    /// use bookshelf::domain::CatalogueSeed;
    ///
    /// let seed = CatalogueSeed::from_json(
    ///     r#"{ "001": { "title": "T1", "author": "A1" } }"#,
    /// )
    /// .expect("valid seed");
    /// assert_eq!(seed.len(), 1);
    /// ```
    pub fn from_json(raw: &str) -> Result<Self, SeedError> {
        let entries: IndexMap<String, SeedBook> = serde_json::from_str(raw)?;
        let books = entries
            .into_iter()
            .map(|(isbn, book)| book.into_record(isbn))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { books })
    }

    /// Number of seeded books.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the seed holds no books.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Consume the seed, yielding records in document order.
    pub fn into_books(self) -> Vec<BookRecord> {
        self.books
    }
}
