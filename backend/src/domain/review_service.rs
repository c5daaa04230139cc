//! Review ledger service.
//!
//! Every mutation is keyed by the caller's own identity. There is no
//! operation that names a target reviewer, so a caller can only ever add,
//! replace or delete their own entry. This is the ownership rule; no
//! separate permission check exists.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::info;

use crate::domain::catalogue_service::map_catalogue_error;
use crate::domain::ports::{CatalogueRepository, ReviewCommand, ReviewQuery};
use crate::domain::{
    BookId, Error, ReviewMap, ReviewOutcome, ReviewText, ReviewValidationError, Username,
};

fn require_caller(caller: Option<&Username>) -> Result<&Username, Error> {
    caller.ok_or_else(|| Error::unauthorized("login required"))
}

fn map_review_validation_error(err: ReviewValidationError) -> Error {
    match err {
        ReviewValidationError::EmptyText => Error::invalid_request("review is required")
            .with_details(json!({ "field": "review", "code": "empty_review" })),
    }
}

/// Review service implementing the review driving ports.
#[derive(Clone)]
pub struct ReviewService<R> {
    catalogue: Arc<R>,
}

impl<R> ReviewService<R> {
    /// Create a service mutating reviews held by `catalogue`.
    pub fn new(catalogue: Arc<R>) -> Self {
        Self { catalogue }
    }
}

#[async_trait]
impl<R> ReviewQuery for ReviewService<R>
where
    R: CatalogueRepository,
{
    async fn reviews_for(&self, isbn: &BookId) -> Result<ReviewMap, Error> {
        let book = self
            .catalogue
            .find(isbn)
            .await
            .map_err(map_catalogue_error)?
            .ok_or_else(|| Error::not_found(format!("book {isbn} not found")))?;
        Ok(book.reviews().clone())
    }
}

#[async_trait]
impl<R> ReviewCommand for ReviewService<R>
where
    R: CatalogueRepository,
{
    async fn upsert_review(
        &self,
        isbn: &BookId,
        caller: Option<&Username>,
        text: Option<&str>,
    ) -> Result<ReviewOutcome, Error> {
        let reviewer = require_caller(caller)?;
        let text = text
            .ok_or(ReviewValidationError::EmptyText)
            .and_then(ReviewText::new)
            .map_err(map_review_validation_error)?;

        let outcome = self
            .catalogue
            .put_review(isbn, reviewer, &text)
            .await
            .map_err(map_catalogue_error)?;
        info!(%isbn, %reviewer, ?outcome, "review stored");
        Ok(outcome)
    }

    async fn delete_review(&self, isbn: &BookId, caller: Option<&Username>) -> Result<(), Error> {
        let reviewer = require_caller(caller)?;
        self.catalogue
            .remove_review(isbn, reviewer)
            .await
            .map_err(map_catalogue_error)?;
        info!(%isbn, %reviewer, "review deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "review_service_tests.rs"]
mod tests;
