//! Scenario world for behaviour tests.
//!
//! Step functions are synchronous, so the world owns an Actix system runner
//! and drives each request on it. The app is rebuilt per request over the
//! same state, session key and clock, which keeps catalogue contents and
//! issued cookies valid across steps.

use std::collections::HashMap;
use std::sync::Arc;

use actix_web::cookie::{Cookie, Key};
use actix_web::http::{Method, StatusCode};
use actix_web::rt::{System, SystemRunner};
use actix_web::web;
use chrono::TimeDelta;
use serde_json::{Value, json};

use bookshelf::inbound::http::state::HttpState;

use super::clock::SteppedClock;
use super::{Reply, http_state, init_app_with, seed, send};

/// Strip the quotes Gherkin step text wraps arguments in.
pub fn unquote(raw: &str) -> &str {
    raw.trim_matches('"')
}

/// Percent-encode the characters scenario review texts use in a query.
fn encode_query_value(raw: &str) -> String {
    raw.replace('%', "%25")
        .replace(' ', "%20")
        .replace('&', "%26")
}

pub struct ShelfWorld {
    runtime: SystemRunner,
    state: web::Data<HttpState>,
    key: Key,
    clock: Arc<SteppedClock>,
    sessions: HashMap<String, Cookie<'static>>,
    last: Option<Reply>,
}

impl ShelfWorld {
    pub fn new() -> Self {
        Self {
            runtime: System::new(),
            state: http_state(seed("{}")),
            key: Key::generate(),
            clock: Arc::new(SteppedClock::starting_at_fixture()),
            sessions: HashMap::new(),
            last: None,
        }
    }

    /// Replace the catalogue with a single book.
    pub fn stock_book(&mut self, isbn: &str, title: &str, author: &str) {
        let json = json!({ isbn: { "title": title, "author": author } }).to_string();
        self.state = http_state(seed(&json));
        self.sessions.clear();
    }

    pub fn request(&mut self, method: Method, uri: &str, body: Option<Value>, reader: Option<&str>) {
        let cookie = reader.map(|name| {
            self.sessions
                .get(name)
                .cloned()
                .unwrap_or_else(|| panic!("{name} has no session"))
        });
        let state = self.state.clone();
        let key = self.key.clone();
        let clock = self.clock.clone();
        let uri = uri.to_owned();
        let reply = self.runtime.block_on(async move {
            let app = init_app_with(state, key, clock).await;
            send(&app, method, &uri, body, cookie.as_ref()).await
        });
        self.last = Some(reply);
    }

    pub fn register(&mut self, name: &str, password: &str) {
        let body = json!({ "username": name, "password": password });
        self.request(Method::POST, "/api/v1/register", Some(body), None);
    }

    /// Log in and keep the session cookie under `name` when one is issued.
    pub fn log_in(&mut self, name: &str, password: &str) {
        let body = json!({ "username": name, "password": password });
        self.request(Method::POST, "/api/v1/customer/login", Some(body), None);
        if let Some(cookie) = self.last().cookie.clone() {
            self.sessions.insert(name.to_owned(), cookie);
        }
    }

    pub fn sign_in(&mut self, name: &str, password: &str) {
        self.register(name, password);
        assert_eq!(self.last().status, StatusCode::CREATED, "register {name}");
        self.log_in(name, password);
        assert_eq!(self.last().status, StatusCode::OK, "log in {name}");
    }

    pub fn review(&mut self, reader: Option<&str>, isbn: &str, text: &str) {
        let uri = format!(
            "/api/v1/customer/auth/review/{isbn}?review={}",
            encode_query_value(text)
        );
        self.request(Method::PUT, &uri, None, reader);
    }

    pub fn delete_review(&mut self, reader: Option<&str>, isbn: &str) {
        let uri = format!("/api/v1/customer/auth/review/{isbn}");
        self.request(Method::DELETE, &uri, None, reader);
    }

    pub fn reviews_on(&mut self, isbn: &str) -> Value {
        self.request(Method::GET, &format!("/api/v1/books/review/{isbn}"), None, None);
        assert_eq!(self.last().status, StatusCode::OK, "reviews on {isbn}");
        self.last().body.clone()
    }

    pub fn advance_clock(&self, delta: TimeDelta) {
        self.clock.advance(delta);
    }

    pub fn last(&self) -> &Reply {
        self.last.as_ref().expect("a request was made")
    }

    pub fn assert_error(&self, status: StatusCode, code: &str) {
        let reply = self.last();
        assert_eq!(reply.status, status);
        assert_eq!(reply.body.get("code").and_then(Value::as_str), Some(code));
        let trace_id = reply.trace_id.as_deref().expect("trace id header");
        assert_eq!(
            reply.body.get("traceId").and_then(Value::as_str),
            Some(trace_id)
        );
    }
}
