//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! Provides a thin wrapper around Actix sessions so handlers only deal with
//! domain-friendly operations such as persisting or retrieving the caller's
//! username.
//!
//! The cookie store keeps no server-side record, so expiry is enforced here:
//! login stamps the session with its issue time and any session older than
//! [`SESSION_TTL_HOURS`] resolves as anonymous.

use std::sync::Arc;

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use chrono::{DateTime, TimeDelta, Utc};
use futures_util::future::LocalBoxFuture;
use mockable::{Clock, DefaultClock};
use tracing::warn;

use crate::domain::{Error, Username};

pub(crate) const USERNAME_KEY: &str = "username";
pub(crate) const ISSUED_AT_KEY: &str = "issued_at";

/// Lifetime of a login session, counted from issue.
pub const SESSION_TTL_HOURS: i64 = 1;

/// Newtype wrapper that exposes higher-level session operations.
///
/// The clock comes from `web::Data<dyn Clock>` app data when registered and
/// falls back to the system clock otherwise.
#[derive(Clone)]
pub struct SessionContext {
    session: Session,
    clock: Arc<dyn Clock>,
}

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session, clock: Arc<dyn Clock>) -> Self {
        Self { session, clock }
    }

    /// Persist the authenticated username in a freshly renewed session.
    ///
    /// Renewal issues a new cookie so a pre-login session cannot be carried
    /// across authentication.
    pub fn persist_user(&self, username: &Username) -> Result<(), Error> {
        self.session.renew();
        self.session
            .insert(USERNAME_KEY, username.as_ref())
            .and_then(|()| {
                self.session
                    .insert(ISSUED_AT_KEY, self.clock.utc().timestamp())
            })
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Fetch the caller's username from the session, if present.
    ///
    /// An empty name, a missing issue time or an expired session is treated
    /// as an anonymous caller; expired sessions are purged.
    pub fn username(&self) -> Result<Option<Username>, Error> {
        let Some(raw) = self.read::<String>(USERNAME_KEY)? else {
            return Ok(None);
        };
        if !self.is_current()? {
            warn!("expired session presented; treating caller as anonymous");
            self.session.purge();
            return Ok(None);
        }
        match Username::new(raw) {
            Ok(name) => Ok(Some(name)),
            Err(error) => {
                warn!("invalid username in session cookie: {error}");
                Ok(None)
            }
        }
    }

    fn is_current(&self) -> Result<bool, Error> {
        let issued_at = self
            .read::<i64>(ISSUED_AT_KEY)?
            .and_then(|seconds| DateTime::<Utc>::from_timestamp(seconds, 0));
        Ok(issued_at.is_some_and(|issued| {
            self.clock.utc().signed_duration_since(issued) < TimeDelta::hours(SESSION_TTL_HOURS)
        }))
    }

    fn read<T: serde::de::DeserializeOwned>(&self, key: &str) -> Result<Option<T>, Error> {
        self.session
            .get::<T>(key)
            .map_err(|error| Error::internal(format!("failed to read session: {error}")))
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let clock = req
            .app_data::<web::Data<dyn Clock>>()
            .map_or_else(
                || Arc::new(DefaultClock) as Arc<dyn Clock>,
                |data| data.clone().into_inner(),
            );
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(|session| Self::new(session, clock)) })
    }
}
