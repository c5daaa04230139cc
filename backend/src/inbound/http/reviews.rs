//! Review mutation handlers for authenticated customers.
//!
//! ```text
//! PUT    /api/v1/customer/auth/review/{isbn}?review=Loved%20it
//! DELETE /api/v1/customer/auth/review/{isbn}
//! ```
//!
//! The reviewer is always the session's username; neither endpoint accepts a
//! target reviewer, so a caller can only ever touch their own entry.

use actix_web::{delete, put, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::ReviewOutcome;
use crate::inbound::http::ApiResult;
use crate::inbound::http::books::parse_book_id;
use crate::inbound::http::messages::MessageResponse;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Query string for `PUT /customer/auth/review/{isbn}`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReviewParams {
    /// Review body; required and non-empty.
    pub review: Option<String>,
}

fn outcome_message(outcome: ReviewOutcome) -> &'static str {
    match outcome {
        ReviewOutcome::Added => "Review added",
        ReviewOutcome::Replaced => "Review modified",
        ReviewOutcome::Unchanged => "Review unchanged",
    }
}

/// Add or replace the caller's review on a book.
#[utoipa::path(
    put,
    path = "/api/v1/customer/auth/review/{isbn}",
    params(("isbn" = String, Path, description = "Book identifier"), ReviewParams),
    responses(
        (status = 200, description = "Review stored", body = MessageResponse),
        (status = 400, description = "Review missing or empty", body = ErrorSchema),
        (status = 401, description = "Login required", body = ErrorSchema),
        (status = 404, description = "Book not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["reviews"],
    operation_id = "upsertReview"
)]
#[put("/customer/auth/review/{isbn}")]
pub async fn upsert_review(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    params: web::Query<ReviewParams>,
) -> ApiResult<web::Json<MessageResponse>> {
    let caller = session.username()?;
    let isbn = parse_book_id(path.into_inner())?;
    let outcome = state
        .reviews
        .upsert_review(&isbn, caller.as_ref(), params.review.as_deref())
        .await?;
    Ok(web::Json(MessageResponse::new(outcome_message(outcome))))
}

/// Delete the caller's review on a book.
#[utoipa::path(
    delete,
    path = "/api/v1/customer/auth/review/{isbn}",
    params(("isbn" = String, Path, description = "Book identifier")),
    responses(
        (status = 200, description = "Review deleted", body = MessageResponse),
        (status = 401, description = "Login required", body = ErrorSchema),
        (status = 404, description = "Book or review not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["reviews"],
    operation_id = "deleteReview"
)]
#[delete("/customer/auth/review/{isbn}")]
pub async fn delete_review(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<MessageResponse>> {
    let caller = session.username()?;
    let isbn = parse_book_id(path.into_inner())?;
    state.reviews.delete_review(&isbn, caller.as_ref()).await?;
    Ok(web::Json(MessageResponse::new("Review deleted")))
}
