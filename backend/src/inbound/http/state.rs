//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    CatalogueQuery, FixtureCatalogueQuery, FixtureLoginService, FixtureReviewCommand,
    FixtureReviewQuery, FixtureUserRegistry, LoginService, ReviewCommand, ReviewQuery,
    UserRegistry,
};

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub catalogue: Arc<dyn CatalogueQuery>,
    pub reviews_query: Arc<dyn ReviewQuery>,
    pub reviews: Arc<dyn ReviewCommand>,
    pub registry: Arc<dyn UserRegistry>,
    pub login: Arc<dyn LoginService>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub catalogue: Arc<dyn CatalogueQuery>,
    pub reviews_query: Arc<dyn ReviewQuery>,
    pub reviews: Arc<dyn ReviewCommand>,
    pub registry: Arc<dyn UserRegistry>,
    pub login: Arc<dyn LoginService>,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Construct state from a ports bundle.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use bookshelf::domain::ports::{
    ///     FixtureCatalogueQuery, FixtureLoginService, FixtureReviewCommand,
    ///     FixtureReviewQuery, FixtureUserRegistry,
    /// };
    /// use bookshelf::inbound::http::state::{HttpState, HttpStatePorts};
    ///
    /// let state = HttpState::new(HttpStatePorts {
    ///     catalogue: Arc::new(FixtureCatalogueQuery),
    ///     reviews_query: Arc::new(FixtureReviewQuery),
    ///     reviews: Arc::new(FixtureReviewCommand),
    ///     registry: Arc::new(FixtureUserRegistry),
    ///     login: Arc::new(FixtureLoginService),
    /// });
    /// let _login = state.login.clone();
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            catalogue,
            reviews_query,
            reviews,
            registry,
            login,
        } = ports;
        Self {
            catalogue,
            reviews_query,
            reviews,
            registry,
            login,
        }
    }

    /// State backed entirely by fixture ports, for handler tests.
    pub fn fixtures() -> Self {
        Self::new(HttpStatePorts {
            catalogue: Arc::new(FixtureCatalogueQuery),
            reviews_query: Arc::new(FixtureReviewQuery),
            reviews: Arc::new(FixtureReviewCommand),
            registry: Arc::new(FixtureUserRegistry),
            login: Arc::new(FixtureLoginService),
        })
    }
}
