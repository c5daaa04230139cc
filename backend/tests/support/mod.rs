//! Shared harness for HTTP integration tests.
//!
//! Assembles the same adapters and services the server binary wires, over a
//! caller-supplied seed and with reads resolving immediately.

pub mod clock;
pub mod world;

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::{Method, StatusCode};
use actix_web::{App, test, web};
use mockable::{Clock, DefaultClock};
use serde_json::Value;

use bookshelf::Trace;
use bookshelf::domain::ports::PlaintextCredentialVerifier;
use bookshelf::domain::{
    CatalogueSeed, CatalogueService, ReadDeferral, ReviewService, TRACE_ID_HEADER,
    UserRegistryService,
};
use bookshelf::inbound::http::books::{
    books_by_author, books_by_title, get_book, get_reviews, list_books,
};
use bookshelf::inbound::http::reviews::{delete_review, upsert_review};
use bookshelf::inbound::http::state::{HttpState, HttpStatePorts};
use bookshelf::inbound::http::users::{login, register};
use bookshelf::outbound::memory::{InMemoryCatalogue, InMemoryUserRepository};

pub const SESSION_COOKIE: &str = "session";

/// Captured response: status, trace header and JSON body.
pub struct Reply {
    pub status: StatusCode,
    pub trace_id: Option<String>,
    pub body: Value,
    pub cookie: Option<Cookie<'static>>,
}

pub fn seed(json: &str) -> CatalogueSeed {
    CatalogueSeed::from_json(json).expect("valid seed")
}

pub fn http_state(seed: CatalogueSeed) -> web::Data<HttpState> {
    let catalogue = Arc::new(InMemoryCatalogue::from_books(seed.into_books()));
    let catalogue_service = Arc::new(CatalogueService::new(
        catalogue.clone(),
        ReadDeferral::immediate(),
    ));
    let review_service = Arc::new(ReviewService::new(catalogue));
    let registry = Arc::new(UserRegistryService::new(
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(PlaintextCredentialVerifier),
    ));
    web::Data::new(HttpState::new(HttpStatePorts {
        catalogue: catalogue_service,
        reviews_query: review_service.clone(),
        reviews: review_service,
        registry: registry.clone(),
        login: registry,
    }))
}

pub async fn init_app(
    seed: CatalogueSeed,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    init_app_with(http_state(seed), Key::generate(), Arc::new(DefaultClock)).await
}

/// Build the app over existing state, so repeated calls share the catalogue,
/// the registry and (through `key`) every issued session.
pub async fn init_app_with(
    state: web::Data<HttpState>,
    key: Key,
    clock: Arc<dyn Clock>,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    let session = SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name(SESSION_COOKIE.to_owned())
        .cookie_secure(false)
        .build();
    test::init_service(
        App::new()
            .app_data(state)
            .app_data(web::Data::from(clock))
            .wrap(Trace)
            .service(
                web::scope("/api/v1")
                    .wrap(session)
                    .service(list_books)
                    .service(get_book)
                    .service(books_by_author)
                    .service(books_by_title)
                    .service(get_reviews)
                    .service(register)
                    .service(login)
                    .service(upsert_review)
                    .service(delete_review),
            ),
    )
    .await
}

pub async fn send<S>(
    app: &S,
    method: Method,
    uri: &str,
    body: Option<Value>,
    cookie: Option<&Cookie<'static>>,
) -> Reply
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let mut request = test::TestRequest::default().method(method).uri(uri);
    if let Some(body) = body {
        request = request.set_json(body);
    }
    if let Some(cookie) = cookie {
        request = request.cookie(cookie.clone());
    }
    let response = test::call_service(app, request.to_request()).await;
    let status = response.status();
    let trace_id = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let cookie = response
        .response()
        .cookies()
        .find(|c| c.name() == SESSION_COOKIE)
        .map(Cookie::into_owned);
    let bytes = test::read_body(response).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("JSON body")
    };
    Reply {
        status,
        trace_id,
        body,
        cookie,
    }
}

/// Register `username` and log in, returning the session cookie.
pub async fn sign_in<S>(app: &S, username: &str, password: &str) -> Cookie<'static>
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let credentials = serde_json::json!({ "username": username, "password": password });
    let registered = send(app, Method::POST, "/api/v1/register", Some(credentials.clone()), None).await;
    assert_eq!(registered.status, StatusCode::CREATED);
    let logged_in = send(app, Method::POST, "/api/v1/customer/login", Some(credentials), None).await;
    assert_eq!(logged_in.status, StatusCode::OK);
    logged_in.cookie.expect("login sets session cookie")
}
