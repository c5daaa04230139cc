//! Driving port for reading a book's reviews.

use async_trait::async_trait;

use crate::domain::{BookId, Error, ReviewMap};

use super::catalogue_query::FIXTURE_ISBN;

/// Domain use-case port for review reads.
#[async_trait]
pub trait ReviewQuery: Send + Sync {
    /// Reviews on `isbn`; `NotFound` when the book is unknown.
    async fn reviews_for(&self, isbn: &BookId) -> Result<ReviewMap, Error>;
}

/// Fixture returning no reviews for the fixture book.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureReviewQuery;

#[async_trait]
impl ReviewQuery for FixtureReviewQuery {
    async fn reviews_for(&self, isbn: &BookId) -> Result<ReviewMap, Error> {
        if isbn.as_ref() == FIXTURE_ISBN {
            Ok(ReviewMap::default())
        } else {
            Err(Error::not_found(format!("book {isbn} not found")))
        }
    }
}
