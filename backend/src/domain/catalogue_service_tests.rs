//! Tests for the catalogue read service.

use std::sync::Arc;

use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::MockCatalogueRepository;
use crate::domain::{BookDraft, ErrorCode, ReviewMap};

fn book(isbn: &str, title: &str, author: &str) -> BookRecord {
    BookRecord::new(BookDraft {
        isbn: BookId::new(isbn).expect("valid isbn"),
        title: title.to_owned(),
        author: author.to_owned(),
        description: None,
        reviews: ReviewMap::default(),
    })
    .expect("valid book")
}

#[fixture]
fn listing() -> BookListing {
    [
        book("1", "Things Fall Apart", "Chinua Achebe"),
        book("2", "Fairy tales", "Hans Christian Andersen"),
        book("3", "No Longer at Ease", "Chinua Achebe"),
        book("4", "Fairy tales", "Brothers Grimm"),
    ]
    .into_iter()
    .map(|book| (book.isbn().clone(), book))
    .collect()
}

fn service_over(listing: BookListing) -> CatalogueService<MockCatalogueRepository> {
    let mut repo = MockCatalogueRepository::new();
    repo.expect_snapshot()
        .returning(move || Ok(listing.clone()));
    CatalogueService::new(Arc::new(repo), ReadDeferral::immediate())
}

fn ids(listing: &BookListing) -> Vec<&str> {
    listing.keys().map(AsRef::as_ref).collect()
}

#[rstest]
#[tokio::test]
async fn all_books_returns_whole_catalogue_in_order(listing: BookListing) {
    let service = service_over(listing);
    let books = service.all_books().await.expect("listing resolves");
    assert_eq!(ids(&books), ["1", "2", "3", "4"]);
}

#[tokio::test]
async fn empty_catalogue_lists_successfully() {
    let service = service_over(BookListing::new());
    let books = service.all_books().await.expect("empty listing is a success");
    assert!(books.is_empty());
}

#[rstest]
#[tokio::test]
async fn author_lookup_returns_every_exact_match(listing: BookListing) {
    let service = service_over(listing);
    let books = service
        .books_by_author("Chinua Achebe")
        .await
        .expect("author has books");
    assert_eq!(ids(&books), ["1", "3"]);
}

#[rstest]
#[tokio::test]
async fn title_lookup_returns_every_exact_match(listing: BookListing) {
    let service = service_over(listing);
    let books = service
        .books_by_title("Fairy tales")
        .await
        .expect("title has books");
    assert_eq!(ids(&books), ["2", "4"]);
}

#[rstest]
#[case("chinua achebe")]
#[case("Chinua")]
#[case("Chinua Achebe ")]
#[case("")]
#[tokio::test]
async fn author_lookup_without_exact_match_is_not_found(
    listing: BookListing,
    #[case] author: &str,
) {
    let service = service_over(listing);
    let err = service
        .books_by_author(author)
        .await
        .expect_err("no exact match");
    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn title_lookup_without_match_is_not_found(listing: BookListing) {
    let service = service_over(listing);
    let err = service
        .books_by_title("Unknown")
        .await
        .expect_err("no match");
    assert_eq!(err.code(), ErrorCode::NotFound);
    assert_eq!(err.message(), "no books found with title Unknown");
}

#[tokio::test]
async fn book_by_id_returns_record() {
    let mut repo = MockCatalogueRepository::new();
    repo.expect_find()
        .withf(|isbn| isbn.as_ref() == "1")
        .times(1)
        .returning(|_| Ok(Some(book("1", "Things Fall Apart", "Chinua Achebe"))));
    let service = CatalogueService::new(Arc::new(repo), ReadDeferral::immediate());

    let found = service
        .book_by_id(&BookId::new("1").expect("valid isbn"))
        .await
        .expect("book exists");
    assert_eq!(found.title(), "Things Fall Apart");
}

#[tokio::test]
async fn book_by_id_unknown_is_not_found() {
    let mut repo = MockCatalogueRepository::new();
    repo.expect_find().times(1).returning(|_| Ok(None));
    let service = CatalogueService::new(Arc::new(repo), ReadDeferral::immediate());

    let err = service
        .book_by_id(&BookId::new("999").expect("valid isbn"))
        .await
        .expect_err("unknown book");
    assert_eq!(err.code(), ErrorCode::NotFound);
    assert_eq!(err.message(), "book 999 not found");
}

#[tokio::test]
async fn store_failures_surface_as_internal_errors() {
    let mut repo = MockCatalogueRepository::new();
    repo.expect_snapshot()
        .times(1)
        .returning(|| Err(CatalogueRepositoryError::unavailable("lock poisoned")));
    let service = CatalogueService::new(Arc::new(repo), ReadDeferral::immediate());

    let err = service.all_books().await.expect_err("store failed");
    assert_eq!(err.code(), ErrorCode::InternalError);
}
