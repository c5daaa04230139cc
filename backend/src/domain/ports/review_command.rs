//! Driving port for review mutations.
//!
//! Callers pass their own resolved identity, never a target reviewer. The
//! mutation key is always the caller, which is what keeps one user from
//! touching another user's review.

use async_trait::async_trait;

use crate::domain::{BookId, Error, ReviewOutcome, Username};

use super::catalogue_query::FIXTURE_ISBN;

/// Domain use-case port for review writes.
#[async_trait]
pub trait ReviewCommand: Send + Sync {
    /// Add or replace the caller's review on `isbn`.
    ///
    /// Fails with `Unauthorized` when `caller` is absent, `InvalidRequest`
    /// when `text` is missing or empty, and `NotFound` when the book is
    /// unknown, checked in that order. Repeating a call with the same text
    /// leaves state unchanged.
    async fn upsert_review(
        &self,
        isbn: &BookId,
        caller: Option<&Username>,
        text: Option<&str>,
    ) -> Result<ReviewOutcome, Error>;

    /// Delete the caller's review on `isbn`.
    ///
    /// Fails with `Unauthorized` when `caller` is absent, `NotFound` when the
    /// book is unknown and `ReviewNotFound` when the caller has no review
    /// there.
    async fn delete_review(&self, isbn: &BookId, caller: Option<&Username>) -> Result<(), Error>;
}

/// Fixture accepting writes against the fixture book only.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureReviewCommand;

#[async_trait]
impl ReviewCommand for FixtureReviewCommand {
    async fn upsert_review(
        &self,
        isbn: &BookId,
        caller: Option<&Username>,
        text: Option<&str>,
    ) -> Result<ReviewOutcome, Error> {
        caller.ok_or_else(|| Error::unauthorized("login required"))?;
        if text.is_none_or(|body| body.is_empty()) {
            return Err(Error::invalid_request("review is required"));
        }
        if isbn.as_ref() != FIXTURE_ISBN {
            return Err(Error::not_found(format!("book {isbn} not found")));
        }
        Ok(ReviewOutcome::Added)
    }

    async fn delete_review(&self, isbn: &BookId, caller: Option<&Username>) -> Result<(), Error> {
        let caller = caller.ok_or_else(|| Error::unauthorized("login required"))?;
        if isbn.as_ref() != FIXTURE_ISBN {
            return Err(Error::not_found(format!("book {isbn} not found")));
        }
        Err(Error::review_not_found(format!(
            "no review by {caller} on book {isbn}"
        )))
    }
}
