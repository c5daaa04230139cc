//! Catalogue read handlers.
//!
//! ```text
//! GET /api/v1/books
//! GET /api/v1/books/isbn/{isbn}
//! GET /api/v1/books/author/{author}
//! GET /api/v1/books/title/{title}
//! GET /api/v1/books/review/{isbn}
//! ```
//!
//! Listings are JSON objects keyed by book identifier in catalogue order.
//! Author and title lookups answer `404` when nothing matches, while the
//! full listing answers `200` with `{}` for an empty catalogue.

use actix_web::{get, web};

use crate::domain::{BookId, BookListing, BookRecord, BookValidationError, Error, ReviewMap};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{
    BookListingSchema, BookRecordSchema, ErrorSchema, ReviewMapSchema,
};
use crate::inbound::http::state::HttpState;

/// Any present path segment is a candidate identifier; one that names no
/// book is simply not found.
pub(crate) fn parse_book_id(raw: String) -> Result<BookId, Error> {
    BookId::new(raw).map_err(|err| match err {
        BookValidationError::EmptyId => Error::not_found("book not found"),
        other => Error::invalid_request(other.to_string()),
    })
}

/// List every book in the catalogue.
#[utoipa::path(
    get,
    path = "/api/v1/books",
    responses(
        (status = 200, description = "Books keyed by identifier", body = BookListingSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["books"],
    operation_id = "listBooks",
    security([])
)]
#[get("/books")]
pub async fn list_books(state: web::Data<HttpState>) -> ApiResult<web::Json<BookListing>> {
    let books = state.catalogue.all_books().await?;
    Ok(web::Json(books))
}

/// Fetch a single book by identifier.
#[utoipa::path(
    get,
    path = "/api/v1/books/isbn/{isbn}",
    params(("isbn" = String, Path, description = "Book identifier")),
    responses(
        (status = 200, description = "Book", body = BookRecordSchema),
        (status = 404, description = "Book not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["books"],
    operation_id = "getBookByIsbn",
    security([])
)]
#[get("/books/isbn/{isbn}")]
pub async fn get_book(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<BookRecord>> {
    let isbn = parse_book_id(path.into_inner())?;
    let book = state.catalogue.book_by_id(&isbn).await?;
    Ok(web::Json(book))
}

/// List books whose author matches exactly.
#[utoipa::path(
    get,
    path = "/api/v1/books/author/{author}",
    params(("author" = String, Path, description = "Exact author name")),
    responses(
        (status = 200, description = "Matching books keyed by identifier", body = BookListingSchema),
        (status = 404, description = "No book by this author", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["books"],
    operation_id = "listBooksByAuthor",
    security([])
)]
#[get("/books/author/{author}")]
pub async fn books_by_author(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<BookListing>> {
    let books = state.catalogue.books_by_author(&path.into_inner()).await?;
    Ok(web::Json(books))
}

/// List books whose title matches exactly.
#[utoipa::path(
    get,
    path = "/api/v1/books/title/{title}",
    params(("title" = String, Path, description = "Exact title")),
    responses(
        (status = 200, description = "Matching books keyed by identifier", body = BookListingSchema),
        (status = 404, description = "No book with this title", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["books"],
    operation_id = "listBooksByTitle",
    security([])
)]
#[get("/books/title/{title}")]
pub async fn books_by_title(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<BookListing>> {
    let books = state.catalogue.books_by_title(&path.into_inner()).await?;
    Ok(web::Json(books))
}

/// Reviews left on a book, keyed by reviewer.
#[utoipa::path(
    get,
    path = "/api/v1/books/review/{isbn}",
    params(("isbn" = String, Path, description = "Book identifier")),
    responses(
        (status = 200, description = "Reviews keyed by username", body = ReviewMapSchema),
        (status = 404, description = "Book not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["books"],
    operation_id = "getBookReviews",
    security([])
)]
#[get("/books/review/{isbn}")]
pub async fn get_reviews(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<ReviewMap>> {
    let isbn = parse_book_id(path.into_inner())?;
    let reviews = state.reviews_query.reviews_for(&isbn).await?;
    Ok(web::Json(reviews))
}
