//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.
//!
//! The schema wrappers mirror the serialised shape of their domain types but
//! live in the inbound adapter layer where framework concerns belong.

use std::collections::BTreeMap;

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or a required value is missing.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// No session, or the presented credentials do not match.
    #[schema(rename = "unauthorized")]
    Unauthorized,
    /// No book matches the lookup.
    #[schema(rename = "not_found")]
    NotFound,
    /// The caller has no review on the addressed book.
    #[schema(rename = "review_not_found")]
    ReviewNotFound,
    /// The username is already registered.
    #[schema(rename = "conflict")]
    Conflict,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "not_found")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "book 42 not found")]
    message: String,
    /// Correlation identifier echoed in the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details, such as the offending field.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::ReviewMap`]: review text keyed by
/// username.
#[derive(ToSchema)]
#[schema(as = crate::domain::ReviewMap)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ReviewMapSchema(BTreeMap<String, String>);

/// OpenAPI schema for [`crate::domain::BookRecord`].
#[derive(ToSchema)]
#[schema(as = crate::domain::BookRecord)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct BookRecordSchema {
    /// Book identifier.
    #[schema(example = "1")]
    isbn: String,
    #[schema(example = "Things Fall Apart")]
    title: String,
    #[schema(example = "Chinua Achebe")]
    author: String,
    /// Omitted when the book has no description.
    description: Option<String>,
    reviews: ReviewMapSchema,
}

/// OpenAPI schema for [`crate::domain::BookListing`]: books keyed by
/// identifier in catalogue order.
#[derive(ToSchema)]
#[schema(as = crate::domain::BookListing)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct BookListingSchema(BTreeMap<String, BookRecordSchema>);
