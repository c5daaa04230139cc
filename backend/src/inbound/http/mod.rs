//! HTTP inbound adapter exposing REST endpoints.
//!
//! Handlers parse paths, query strings and JSON bodies, resolve the caller's
//! username from the cookie session, and delegate to the driving ports held
//! in [`state::HttpState`].

pub mod books;
pub mod error;
pub mod health;
pub mod messages;
pub mod reviews;
pub mod schemas;
pub mod session;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;

pub use error::ApiResult;
