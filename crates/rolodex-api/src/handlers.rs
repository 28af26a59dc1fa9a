//! REST endpoint handlers for the people API.
//!
//! Every handler reads or mutates the [`PersonStore`] held by the shared
//! [`AppState`]. Request bodies are taken as raw bytes and decoded here so
//! that any malformed body, whatever its `Content-Type`, surfaces as
//! [`ApiError::InvalidInput`] with the usual JSON error shape.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/hello` | Static greeting |
//! | `GET` | `/people` | List people, or search with `?query=` |
//! | `POST` | `/people` | Create a person |
//! | `DELETE` | `/people` | Delete every person |
//! | `GET` | `/people/stats` | Count and average age |
//! | `GET` | `/people/{id}` | Single person |
//! | `PUT` | `/people/{id}` | Replace a person |
//! | `PATCH` | `/people/{id}` | Partially update a person |
//! | `DELETE` | `/people/{id}` | Delete a person |
//!
//! [`PersonStore`]: rolodex_store::PersonStore

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, Uri};
use axum::response::IntoResponse;
use rolodex_types::{PeopleStats, Person, PersonId, PersonInput, PersonPatch};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::AppState;

/// Raw `key=value` pairs of a query string, in request order.
type QueryPairs = Vec<(String, String)>;

/// Path segment holding a person id, before parsing.
type IdSegment = Result<Path<String>, PathRejection>;

// ---------------------------------------------------------------------------
// GET /hello
// ---------------------------------------------------------------------------

/// Return the configured greeting.
pub async fn hello(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "message": state.greeting,
    }))
}

// ---------------------------------------------------------------------------
// /people
// ---------------------------------------------------------------------------

/// List all people in insertion order, or search by name.
///
/// # Query Parameters
///
/// - `query`: substring to look for in names, case-insensitive. Must
///   not be empty when given. Only the first occurrence counts.
pub async fn list_people(
    State(state): State<Arc<AppState>>,
    params: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<Vec<Person>>, ApiError> {
    let Query(pairs) = params.map_err(|e| ApiError::InvalidInput(e.body_text()))?;
    let needle = first_value(&pairs, "query");
    let store = state.store.read().await;

    match needle {
        None => Ok(Json(store.list().to_vec())),
        Some("") => Err(ApiError::MissingQuery),
        Some(needle) => {
            let found = store.search(needle);
            debug!(query = needle, matches = found.len(), "people searched");
            Ok(Json(found))
        }
    }
}

/// Create a person from the request body. A client-supplied id is ignored
/// once it has decoded as an integer.
pub async fn create_person(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let input: PersonInput = decode_body(&body)?;

    let person = state.store.write().await.create(input)?;
    info!(person_id = %person.id, "person created");

    Ok((StatusCode::CREATED, Json(person)))
}

/// Delete every person. The id counter keeps counting.
pub async fn clear_people(State(state): State<Arc<AppState>>) -> StatusCode {
    let removed = state.store.write().await.clear();
    info!(removed, "people cleared");
    StatusCode::NO_CONTENT
}

// ---------------------------------------------------------------------------
// GET /people/stats
// ---------------------------------------------------------------------------

/// Return the record count, truncated average age, and every record.
pub async fn people_stats(State(state): State<Arc<AppState>>) -> Json<PeopleStats> {
    Json(state.store.read().await.stats())
}

// ---------------------------------------------------------------------------
// /people/{id}
// ---------------------------------------------------------------------------

/// Return a single person.
pub async fn get_person(
    State(state): State<Arc<AppState>>,
    segment: IdSegment,
) -> Result<Json<Person>, ApiError> {
    let id = path_id(segment)?;
    let store = state.store.read().await;
    Ok(Json(store.get(id)?.clone()))
}

/// Replace name, age and phone of a person.
///
/// A missing person is reported before the body is looked at.
pub async fn update_person(
    State(state): State<Arc<AppState>>,
    segment: IdSegment,
    body: Bytes,
) -> Result<Json<Person>, ApiError> {
    let id = path_id(segment)?;
    let mut store = state.store.write().await;
    store.get(id)?;

    let input: PersonInput = decode_body(&body)?;
    let person = store.update(id, input)?.clone();
    info!(person_id = %id, "person updated");

    Ok(Json(person))
}

/// Apply the fields present in the body to a person.
///
/// A missing person is reported before the body is looked at.
pub async fn patch_person(
    State(state): State<Arc<AppState>>,
    segment: IdSegment,
    body: Bytes,
) -> Result<Json<Person>, ApiError> {
    let id = path_id(segment)?;
    let mut store = state.store.write().await;
    store.get(id)?;

    let patch: PersonPatch = decode_body(&body)?;
    if patch.is_empty() {
        debug!(person_id = %id, "empty patch");
    }
    let person = store.patch(id, patch)?.clone();
    info!(person_id = %id, "person patched");

    Ok(Json(person))
}

/// Delete a single person.
pub async fn delete_person(
    State(state): State<Arc<AppState>>,
    segment: IdSegment,
) -> Result<StatusCode, ApiError> {
    let id = path_id(segment)?;
    state.store.write().await.delete(id)?;
    info!(person_id = %id, "person deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Fallbacks
// ---------------------------------------------------------------------------

/// Answer a known path requested with an unsupported method.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Answer a path no route matches.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::RouteNotFound(uri.path().to_owned())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// First value of `key` in a query string, if the key appears at all.
fn first_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// Extract and parse the person id of a `/people/{id}` request.
///
/// A segment axum cannot decode (e.g. invalid UTF-8) is reported the same
/// way as one that is not an integer.
fn path_id(segment: IdSegment) -> Result<PersonId, ApiError> {
    let Path(raw) = segment.map_err(|e| ApiError::InvalidId(e.body_text()))?;
    parse_id(&raw)
}

/// Parse a person id from a path segment, returning an [`ApiError`] on failure.
fn parse_id(s: &str) -> Result<PersonId, ApiError> {
    s.parse::<PersonId>()
        .map_err(|e| ApiError::InvalidId(format!("{s}: {e}")))
}

/// Decode a JSON request body, returning an [`ApiError`] on failure.
fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::InvalidInput(e.to_string()))
}
