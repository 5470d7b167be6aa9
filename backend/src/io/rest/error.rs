//! Translation of domain errors into HTTP responses.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use shared::ErrorResponse;
use tracing::{error, info};

use crate::domain::PersonError;

const MALFORMED_ID: &str = "malformatted id";
const INTERNAL_ERROR: &str = "internal server error";
const MALFORMED_BODY: &str = "malformatted request body";

fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorResponse::new(message))).into_response()
}

impl IntoResponse for PersonError {
    fn into_response(self) -> Response {
        match self {
            PersonError::Validation(err) => json_error(StatusCode::BAD_REQUEST, err.to_string()),
            PersonError::NotFound(_) => StatusCode::NOT_FOUND.into_response(),
            PersonError::InvalidIdentifier(_) => json_error(StatusCode::BAD_REQUEST, MALFORMED_ID),
            PersonError::StoreUnavailable(source) => {
                error!("Unhandled store error: {:?}", source);
                json_error(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
            }
        }
    }
}

/// Response for a request body that is not a valid person payload
pub fn malformed_body(rejection: JsonRejection) -> Response {
    info!("Rejected request body: {}", rejection.body_text());
    json_error(StatusCode::BAD_REQUEST, MALFORMED_BODY)
}

/// Fallback for unmatched `/api` routes
pub async fn unknown_endpoint() -> Response {
    json_error(StatusCode::NOT_FOUND, "unknown endpoint")
}
