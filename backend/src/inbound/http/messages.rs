//! Acknowledgement payloads for mutating endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Human-readable confirmation returned by register, login and review
/// mutations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Review added")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
