//! # REST API for Phonebook Entries
//!
//! CRUD endpoints under `/api/persons`.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use shared::PersonPayload;
use tracing::info;

use super::error::malformed_body;
use crate::domain::PersonError;
use crate::AppState;

/// Create the person API router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/persons", get(list_persons).post(create_person))
        .route(
            "/persons/:id",
            get(get_person).put(update_person).delete(delete_person),
        )
}

// Store failures are logged by the error translator
fn is_logged_by_handler(e: &PersonError) -> bool {
    !matches!(e, PersonError::StoreUnavailable(_))
}

fn log_failure(action: &str, e: &PersonError) {
    if is_logged_by_handler(e) {
        info!("Rejected {}: {}", action, e);
    }
}

fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let mime = content_type.split(';').next().unwrap_or_default().trim();
    mime.eq_ignore_ascii_case("application/json") || mime.ends_with("+json")
}

/// Decode a person payload.
///
/// A body without a JSON content type, or an empty one, reads as `{}` so
/// that missing fields are reported by validation. Unparseable JSON is a
/// 400 with a JSON error body.
fn decode_payload(headers: &HeaderMap, body: &Bytes) -> Result<PersonPayload, Response> {
    if !is_json_content_type(headers) || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(PersonPayload::default());
    }

    Json::<PersonPayload>::from_bytes(body)
        .map(|Json(payload)| payload)
        .map_err(malformed_body)
}

/// List all persons
pub async fn list_persons(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/persons");

    match state.person_service.list_persons().await {
        Ok(persons) => (StatusCode::OK, Json(persons)).into_response(),
        Err(e) => {
            log_failure("list persons", &e);
            e.into_response()
        }
    }
}

/// Get a person by ID
pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/persons/{}", id);

    match state.person_service.get_person(&id).await {
        Ok(person) => (StatusCode::OK, Json(person)).into_response(),
        Err(e) => {
            log_failure("get person", &e);
            e.into_response()
        }
    }
}

/// Create a new person
pub async fn create_person(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let payload = match decode_payload(&headers, &body) {
        Ok(payload) => payload,
        Err(response) => return response,
    };
    info!("POST /api/persons - payload: {:?}", payload);

    match state.person_service.create_person(payload).await {
        Ok(person) => (StatusCode::CREATED, Json(person)).into_response(),
        Err(e) => {
            log_failure("create person", &e);
            e.into_response()
        }
    }
}

/// Update a person
pub async fn update_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let payload = match decode_payload(&headers, &body) {
        Ok(payload) => payload,
        Err(response) => return response,
    };
    info!("PUT /api/persons/{} - payload: {:?}", id, payload);

    match state.person_service.update_person(&id, payload).await {
        Ok(person) => (StatusCode::OK, Json(person)).into_response(),
        Err(e) => {
            log_failure("update person", &e);
            e.into_response()
        }
    }
}

/// Delete a person
pub async fn delete_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/persons/{}", id);

    match state.person_service.delete_person(&id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            log_failure("delete person", &e);
            e.into_response()
        }
    }
}
