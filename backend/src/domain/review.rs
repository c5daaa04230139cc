//! Reviews attached to catalogue books.
//!
//! A book carries at most one review per reviewer. Writes are always keyed by
//! the caller's own [`Username`], so nothing in this module can address
//! another reviewer's entry.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::Username;

/// Validation errors returned by [`ReviewText::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewValidationError {
    /// Review body was missing or the empty string.
    EmptyText,
}

impl fmt::Display for ReviewValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyText => write!(f, "review text must not be empty"),
        }
    }
}

impl std::error::Error for ReviewValidationError {}

/// Review body, stored verbatim; only presence is checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ReviewText(String);

impl ReviewText {
    /// Validate and construct a review body.
    pub fn new(text: impl Into<String>) -> Result<Self, ReviewValidationError> {
        let text = text.into();
        if text.is_empty() {
            return Err(ReviewValidationError::EmptyText);
        }
        Ok(Self(text))
    }
}

impl AsRef<str> for ReviewText {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<ReviewText> for String {
    fn from(value: ReviewText) -> Self {
        value.0
    }
}

impl TryFrom<String> for ReviewText {
    type Error = ReviewValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// How an upsert changed the review map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewOutcome {
    /// The reviewer had no review on the book before.
    Added,
    /// The reviewer's previous text was replaced.
    Replaced,
    /// The same text was submitted again; state is untouched.
    Unchanged,
}

/// Reviews on one book keyed by reviewer.
///
/// Ordered by reviewer so serialised output is stable.
///
/// # Examples
/// ```
/// use bookshelf::domain::{ReviewMap, ReviewOutcome, ReviewText, Username};
///
/// let mut reviews = ReviewMap::default();
/// let alice = Username::new("alice").expect("valid username");
/// let text = ReviewText::new("great").expect("valid review");
/// assert_eq!(reviews.upsert(alice.clone(), text.clone()), ReviewOutcome::Added);
/// assert_eq!(reviews.upsert(alice.clone(), text), ReviewOutcome::Unchanged);
/// assert_eq!(reviews.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewMap(BTreeMap<Username, ReviewText>);

impl ReviewMap {
    /// Set `reviewer`'s review, replacing any previous text.
    pub fn upsert(&mut self, reviewer: Username, text: ReviewText) -> ReviewOutcome {
        match self.0.get(&reviewer) {
            Some(existing) if *existing == text => ReviewOutcome::Unchanged,
            Some(_) => {
                self.0.insert(reviewer, text);
                ReviewOutcome::Replaced
            }
            None => {
                self.0.insert(reviewer, text);
                ReviewOutcome::Added
            }
        }
    }

    /// Remove `reviewer`'s review, returning it when one existed.
    pub fn remove(&mut self, reviewer: &Username) -> Option<ReviewText> {
        self.0.remove(reviewer)
    }

    /// Look up `reviewer`'s review.
    pub fn get(&self, reviewer: &Username) -> Option<&ReviewText> {
        self.0.get(reviewer)
    }

    /// Number of reviewers with a review on the book.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the book has no reviews.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate reviews in reviewer order.
    pub fn iter(&self) -> impl Iterator<Item = (&Username, &ReviewText)> {
        self.0.iter()
    }
}

impl FromIterator<(Username, ReviewText)> for ReviewMap {
    fn from_iter<I: IntoIterator<Item = (Username, ReviewText)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
