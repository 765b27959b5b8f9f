//! Axum router construction for the phonebook API.
//!
//! Assembles every route into a single [`Router`] with CORS enabled for
//! cross-origin clients and request tracing.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, put};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router.
///
/// The router includes:
/// - `GET /api/people/count` -- number of people
/// - `GET /api/people` -- list people, optionally filtered by phone
/// - `POST /api/people` -- create a person
/// - `GET /api/people/by-name/{name}` -- exact-name lookup
/// - `PUT /api/people/{id}/phone` -- replace a phone
/// - `GET /api/schema` -- SDL document
///
/// CORS allows any origin.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/people/count", get(handlers::person_count))
        .route(
            "/api/people",
            get(handlers::all_people).post(handlers::add_person),
        )
        .route("/api/people/by-name/{name}", get(handlers::find_person))
        .route("/api/people/{id}/phone", put(handlers::edit_phone))
        .route("/api/schema", get(handlers::schema))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
