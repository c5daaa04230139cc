//! Server construction and middleware wiring.

mod config;
mod session_key;
mod state_builders;

pub use config::{ServerConfig, ServerSettings};
pub use session_key::{BuildMode, load_session_key};

use state_builders::build_http_state;

use std::sync::Arc;

use actix_session::{
    SessionMiddleware,
    config::{CookieContentSecurity, PersistentSession},
    storage::CookieSessionStore,
};
use actix_web::cookie::{Key, SameSite};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use mockable::{Clock, DefaultClock};

use bookshelf::Trace;
use bookshelf::doc::openapi_json;
use bookshelf::domain::ReadDeferral;
use bookshelf::inbound::http::books::{
    books_by_author, books_by_title, get_book, get_reviews, list_books,
};
use bookshelf::inbound::http::health::{HealthState, live, ready};
use bookshelf::inbound::http::reviews::{delete_review, upsert_review};
use bookshelf::inbound::http::session::SESSION_TTL_HOURS;
use bookshelf::inbound::http::state::HttpState;
use bookshelf::inbound::http::users::{login, register};

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    key: Key,
    cookie_secure: bool,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        key,
        cookie_secure,
    } = deps;

    let session = SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".into())
        .cookie_path("/".into())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(SameSite::Lax)
        .session_lifecycle(
            PersistentSession::default()
                .session_ttl(actix_web::cookie::time::Duration::hours(SESSION_TTL_HOURS)),
        )
        .build();

    let api = web::scope("/api/v1")
        .wrap(session)
        .service(list_books)
        .service(get_book)
        .service(books_by_author)
        .service(books_by_title)
        .service(get_reviews)
        .service(register)
        .service(login)
        .service(upsert_review)
        .service(delete_review);

    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);

    App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(web::Data::from(clock))
        .wrap(Trace)
        .service(api)
        .service(openapi_json)
        .service(ready)
        .service(live)
}

/// Construct an Actix HTTP server using the provided health state and
/// configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig {
        key,
        cookie_secure,
        bind_addr,
        seed,
    } = config;
    let http_state = build_http_state(seed, ReadDeferral::fixed());
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            key: key.clone(),
            cookie_secure,
        })
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
