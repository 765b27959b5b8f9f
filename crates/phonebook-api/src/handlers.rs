//! REST endpoint handlers.
//!
//! Each handler extracts its inputs, calls one [`QuerySurface`] operation,
//! and serializes the result. Failures render through [`ApiError`].
//!
//! # Endpoints
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | `GET` | `/api/people/count` | `personCount` |
//! | `GET` | `/api/people` | `allPeople` (`?phone=YES\|NO`) |
//! | `GET` | `/api/people/by-name/{name}` | `findPerson` |
//! | `POST` | `/api/people` | `addPerson` |
//! | `PUT` | `/api/people/{id}/phone` | `editPhone` |
//! | `GET` | `/api/schema` | SDL document |
//!
//! [`QuerySurface`]: crate::surface::QuerySurface

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use phonebook_types::{NewPerson, PersonId, PhoneFilter};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;
use crate::surface::PersonView;

// ---------------------------------------------------------------------------
// Request and response bodies
// ---------------------------------------------------------------------------

/// Query parameters for `GET /api/people`.
#[derive(Debug, Deserialize)]
pub struct PeopleQuery {
    /// Restrict to people with (`YES`) or without (`NO`) a phone.
    pub phone: Option<PhoneFilter>,
}

/// Body of `PUT /api/people/{id}/phone`.
#[derive(Debug, Deserialize)]
pub struct EditPhoneRequest {
    /// Replacement phone number.
    pub phone: String,
}

/// Body returned by `GET /api/people/count`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountResponse {
    /// Number of stored people.
    pub person_count: u64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// `GET /api/people/count`
pub async fn person_count(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CountResponse>, ApiError> {
    let person_count = state.surface.person_count().await?;
    Ok(Json(CountResponse { person_count }))
}

/// `GET /api/people`
///
/// # Query Parameters
///
/// - `phone`: `YES` | `NO` (omitted: everyone)
pub async fn all_people(
    State(state): State<Arc<AppState>>,
    query: Result<Query<PeopleQuery>, QueryRejection>,
) -> Result<Json<Vec<PersonView>>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::bad_input(e.body_text()))?;
    let people = state.surface.all_people(query.phone).await?;
    Ok(Json(people))
}

/// `GET /api/people/by-name/{name}`
pub async fn find_person(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<PersonView>, ApiError> {
    let person = state.surface.find_person(&name).await?;
    Ok(Json(person))
}

/// `POST /api/people`
///
/// Responds `201 Created` with the stored person.
pub async fn add_person(
    State(state): State<Arc<AppState>>,
    body: Result<Json<NewPerson>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(new) = body.map_err(|e| ApiError::bad_input(e.body_text()))?;
    let person = state
        .surface
        .add_person(new.name, new.phone, new.street, new.city)
        .await?;
    Ok((StatusCode::CREATED, Json(person)))
}

/// `PUT /api/people/{id}/phone`
///
/// Responds with the updated person, or `null` when the id is unknown.
pub async fn edit_phone(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Json<EditPhoneRequest>, JsonRejection>,
) -> Result<Json<Option<PersonView>>, ApiError> {
    let Json(request) = body.map_err(|e| ApiError::bad_input(e.body_text()))?;
    let updated = state
        .surface
        .edit_phone(&PersonId::from(id), &request.phone)
        .await?;
    Ok(Json(updated))
}

/// `GET /api/schema`
pub async fn schema(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [(CONTENT_TYPE, "text/plain; charset=utf-8")],
        state.surface.schema(),
    )
}
