//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the OpenAPI document for the REST API. It registers
//! every handler under the inbound HTTP layer, the schema wrappers from
//! [`crate::inbound::http::schemas`] that keep utoipa out of the domain, and
//! the session cookie security scheme. The server publishes the document at
//! `/api-docs/openapi.json`.

use actix_web::{get, web};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::inbound::http::messages::MessageResponse;
use crate::inbound::http::schemas::{
    BookListingSchema, BookRecordSchema, ErrorCodeSchema, ErrorSchema, ReviewMapSchema,
};
use crate::inbound::http::users::CredentialsRequest;

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/v1/customer/login; valid for one hour.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Bookshelf API",
        description = "Book catalogue lookups, customer registration and session-authenticated reviews."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::books::list_books,
        crate::inbound::http::books::get_book,
        crate::inbound::http::books::books_by_author,
        crate::inbound::http::books::books_by_title,
        crate::inbound::http::books::get_reviews,
        crate::inbound::http::users::register,
        crate::inbound::http::users::login,
        crate::inbound::http::reviews::upsert_review,
        crate::inbound::http::reviews::delete_review,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        BookListingSchema,
        BookRecordSchema,
        ReviewMapSchema,
        ErrorSchema,
        ErrorCodeSchema,
        MessageResponse,
        CredentialsRequest
    )),
    tags(
        (name = "books", description = "Public catalogue lookups"),
        (name = "reviews", description = "Review changes by the signed-in customer"),
        (name = "users", description = "Registration and login"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

/// Serve the generated OpenAPI document as JSON.
#[get("/api-docs/openapi.json")]
pub async fn openapi_json() -> web::Json<utoipa::openapi::OpenApi> {
    web::Json(ApiDoc::openapi())
}
