//! Book records held by the catalogue.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::ReviewMap;

/// Validation errors returned by book constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookValidationError {
    /// Identifier was the empty string.
    EmptyId,
    /// Title was the empty string.
    EmptyTitle,
    /// Author was the empty string.
    EmptyAuthor,
}

impl fmt::Display for BookValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "book identifier must not be empty"),
            Self::EmptyTitle => write!(f, "book title must not be empty"),
            Self::EmptyAuthor => write!(f, "book author must not be empty"),
        }
    }
}

impl std::error::Error for BookValidationError {}

/// Externally assigned book identifier, for example an ISBN.
///
/// The value is kept verbatim, whitespace included; only the empty string
/// is rejected.
///
/// # Examples
/// ```
/// use bookshelf::domain::BookId;
///
/// let id = BookId::new("978-0385474542").expect("valid id");
/// assert_eq!(id.as_ref(), "978-0385474542");
/// assert!(BookId::new("").is_err());
/// assert_eq!(BookId::new(" ").expect("present id").as_ref(), " ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BookId(String);

impl BookId {
    /// Validate and construct a [`BookId`].
    pub fn new(id: impl Into<String>) -> Result<Self, BookValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(BookValidationError::EmptyId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for BookId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<BookId> for String {
    fn from(value: BookId) -> Self {
        value.0
    }
}

impl TryFrom<String> for BookId {
    type Error = BookValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Input bundle for [`BookRecord::new`].
#[derive(Debug, Clone)]
pub struct BookDraft {
    pub isbn: BookId,
    pub title: String,
    pub author: String,
    pub description: Option<String>,
    pub reviews: ReviewMap,
}

/// A catalogue entry together with its reviews.
///
/// ## Invariants
/// - `isbn` never changes once the record exists.
/// - `title` and `author` are present; they are matched verbatim by the
///   author and title lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRecord {
    isbn: BookId,
    title: String,
    author: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    description: Option<String>,
    #[serde(default)]
    reviews: ReviewMap,
}

impl BookRecord {
    /// Build a record from a validated draft.
    pub fn new(draft: BookDraft) -> Result<Self, BookValidationError> {
        let BookDraft {
            isbn,
            title,
            author,
            description,
            reviews,
        } = draft;
        if title.is_empty() {
            return Err(BookValidationError::EmptyTitle);
        }
        if author.is_empty() {
            return Err(BookValidationError::EmptyAuthor);
        }
        Ok(Self {
            isbn,
            title,
            author,
            description: description.filter(|text| !text.is_empty()),
            reviews,
        })
    }

    /// Identifier of the book.
    pub fn isbn(&self) -> &BookId {
        &self.isbn
    }

    /// Title as stored.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Author as stored.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Optional free-text description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Reviews keyed by reviewer.
    pub fn reviews(&self) -> &ReviewMap {
        &self.reviews
    }

    /// Mutable access for the catalogue store; no other owner exists.
    pub(crate) fn reviews_mut(&mut self) -> &mut ReviewMap {
        &mut self.reviews
    }
}

/// Books keyed by identifier in catalogue insertion order.
pub type BookListing = IndexMap<BookId, BookRecord>;
