//! Registration and login handlers.
//!
//! ```text
//! POST /api/v1/register {"username":"alice","password":"secret"}
//! POST /api/v1/customer/login {"username":"alice","password":"secret"}
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::domain::{Error, LoginCredentials, LoginValidationError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::messages::MessageResponse;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Credentials body shared by `POST /register` and `POST /customer/login`.
///
/// Missing fields deserialise as empty strings so they surface as the same
/// validation error as empty ones.
///
/// Example JSON:
/// `{"username":"alice","password":"secret"}`
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CredentialsRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl TryFrom<CredentialsRequest> for LoginCredentials {
    type Error = LoginValidationError;

    fn try_from(value: CredentialsRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.username, &value.password)
    }
}

fn map_login_validation_error(err: LoginValidationError) -> Error {
    match err {
        LoginValidationError::EmptyUsername => Error::invalid_request("username is required")
            .with_details(json!({ "field": "username", "code": "empty_username" })),
        LoginValidationError::EmptyPassword => Error::invalid_request("password is required")
            .with_details(json!({ "field": "password", "code": "empty_password" })),
    }
}

fn parse_credentials(payload: web::Json<CredentialsRequest>) -> Result<LoginCredentials, Error> {
    LoginCredentials::try_from(payload.into_inner()).map_err(map_login_validation_error)
}

/// Register a new customer account.
#[utoipa::path(
    post,
    path = "/api/v1/register",
    request_body = CredentialsRequest,
    responses(
        (status = 201, description = "User registered", body = MessageResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 409, description = "Username already exists", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "register",
    security([])
)]
#[post("/register")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<CredentialsRequest>,
) -> ApiResult<HttpResponse> {
    let credentials = parse_credentials(payload)?;
    state.registry.register(&credentials).await?;
    Ok(HttpResponse::Created().json(MessageResponse::new("User registered successfully")))
}

/// Authenticate a customer and establish a session.
///
/// The session cookie expires one hour after it is issued.
#[utoipa::path(
    post,
    path = "/api/v1/customer/login",
    request_body = CredentialsRequest,
    responses(
        (status = 200, description = "Login success", body = MessageResponse,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Invalid credentials", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "login",
    security([])
)]
#[post("/customer/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<CredentialsRequest>,
) -> ApiResult<web::Json<MessageResponse>> {
    let credentials = parse_credentials(payload)?;
    let username = state.login.login(&credentials).await?;
    session.persist_user(&username)?;
    debug!(%username, "session issued");
    Ok(web::Json(MessageResponse::new("User successfully logged in")))
}
