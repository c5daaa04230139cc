//! Wiring of in-memory adapters and domain services into HTTP state.

use std::sync::Arc;

use actix_web::web;
use tracing::info;

use bookshelf::domain::ports::PlaintextCredentialVerifier;
use bookshelf::domain::{
    CatalogueSeed, CatalogueService, ReadDeferral, ReviewService, UserRegistryService,
};
use bookshelf::inbound::http::state::{HttpState, HttpStatePorts};
use bookshelf::outbound::memory::{InMemoryCatalogue, InMemoryUserRepository};

/// Build handler state over a catalogue seeded from `seed` and an empty user
/// registry.
pub(crate) fn build_http_state(seed: CatalogueSeed, deferral: ReadDeferral) -> web::Data<HttpState> {
    info!(books = seed.len(), "seeding catalogue");
    let catalogue = Arc::new(InMemoryCatalogue::from_books(seed.into_books()));
    let users = Arc::new(InMemoryUserRepository::new());

    let catalogue_service = Arc::new(CatalogueService::new(catalogue.clone(), deferral));
    let review_service = Arc::new(ReviewService::new(catalogue));
    let registry_service = Arc::new(UserRegistryService::new(
        users,
        Arc::new(PlaintextCredentialVerifier),
    ));

    web::Data::new(HttpState::new(HttpStatePorts {
        catalogue: catalogue_service,
        reviews_query: review_service.clone(),
        reviews: review_service,
        registry: registry_service.clone(),
        login: registry_service,
    }))
}
