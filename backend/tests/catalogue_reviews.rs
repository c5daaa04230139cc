//! Catalogue and review edge cases over the HTTP surface.
//!
//! The review lifecycle and ownership flows live in
//! `catalogue_reviews_bdd.rs`.

// Shared helpers are not all used by every test crate.
#[allow(dead_code)]
mod support;

use actix_web::http::{Method, StatusCode};
use rstest::rstest;
use serde_json::{Value, json};

use support::{init_app, seed, send, sign_in};

const SINGLE_BOOK: &str = r#"{"001": {"title": "T1", "author": "A1"}}"#;

const SHARED_AUTHOR: &str = r#"{
    "b": {"title": "Second", "author": "Same"},
    "a": {"title": "First", "author": "Same"},
    "c": {"title": "Other", "author": "Elsewhere"}
}"#;

#[actix_web::test]
async fn listings_keep_catalogue_order() {
    let app = init_app(seed(SHARED_AUTHOR)).await;

    let all = send(&app, Method::GET, "/api/v1/books", None, None).await;
    let keys: Vec<&str> = all
        .body
        .as_object()
        .expect("object listing")
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, ["b", "a", "c"]);

    let by_author = send(&app, Method::GET, "/api/v1/books/author/Same", None, None).await;
    let keys: Vec<&str> = by_author
        .body
        .as_object()
        .expect("object listing")
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, ["b", "a"]);
}

#[actix_web::test]
async fn empty_catalogue_lists_successfully_but_lookups_fail() {
    let app = init_app(seed("{}")).await;

    let all = send(&app, Method::GET, "/api/v1/books", None, None).await;
    assert_eq!(all.status, StatusCode::OK);
    assert_eq!(all.body, json!({}));

    let by_title = send(&app, Method::GET, "/api/v1/books/title/T1", None, None).await;
    assert_eq!(by_title.status, StatusCode::NOT_FOUND);
}

#[rstest]
#[case(Method::GET, "/api/v1/books/isbn/404")]
#[case(Method::GET, "/api/v1/books/review/404")]
#[case(Method::PUT, "/api/v1/customer/auth/review/404?review=hi")]
#[case(Method::DELETE, "/api/v1/customer/auth/review/404")]
#[case(Method::GET, "/api/v1/books/isbn/%20")]
#[case(Method::GET, "/api/v1/books/review/%20")]
#[case(Method::PUT, "/api/v1/customer/auth/review/%20?review=hi")]
#[case(Method::DELETE, "/api/v1/customer/auth/review/%20")]
#[actix_web::test]
async fn unknown_book_is_not_found_everywhere(#[case] method: Method, #[case] uri: &str) {
    let app = init_app(seed(SINGLE_BOOK)).await;
    let alice = sign_in(&app, "alice", "pw").await;

    let reply = send(&app, method, uri, None, Some(&alice)).await;
    assert_eq!(reply.status, StatusCode::NOT_FOUND);
    assert_eq!(reply.body["code"], "not_found");
    assert!(reply.trace_id.is_some());
    assert_eq!(
        reply.body.get("traceId").and_then(Value::as_str),
        reply.trace_id.as_deref()
    );
}

#[rstest]
#[case("/api/v1/customer/auth/review/001?review=hi", "unauthorized")]
#[case("/api/v1/customer/auth/review/001", "unauthorized")]
#[case("/api/v1/customer/auth/review/404", "unauthorized")]
#[actix_web::test]
async fn anonymous_upsert_is_rejected_first(#[case] uri: &str, #[case] code: &str) {
    let app = init_app(seed(SINGLE_BOOK)).await;
    let reply = send(&app, Method::PUT, uri, None, None).await;
    assert_eq!(reply.status, StatusCode::UNAUTHORIZED);
    assert_eq!(reply.body["code"], code);
}

#[actix_web::test]
async fn missing_review_text_beats_unknown_book() {
    let app = init_app(seed(SINGLE_BOOK)).await;
    let alice = sign_in(&app, "alice", "pw").await;
    let reply = send(
        &app,
        Method::PUT,
        "/api/v1/customer/auth/review/404",
        None,
        Some(&alice),
    )
    .await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(reply.body["details"]["code"], "empty_review");
}
