//! Axum router construction for the people API.
//!
//! Assembles all routes into a single [`Router`] with CORS and request
//! tracing middleware. Wrong methods on known paths and unknown paths
//! both answer with the JSON error shape instead of Axum's empty bodies.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the people API.
///
/// The router includes:
/// - `GET /hello` -- greeting
/// - `GET|POST|DELETE /people` -- list or search, create, clear
/// - `GET /people/stats` -- aggregate stats
/// - `GET|PUT|PATCH|DELETE /people/{id}` -- single-record operations
///
/// `/people/stats` is a static segment and wins over the `{id}` capture.
/// CORS is configured to allow any origin.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/hello", get(handlers::hello))
        .route(
            "/people",
            get(handlers::list_people)
                .post(handlers::create_person)
                .delete(handlers::clear_people),
        )
        .route("/people/stats", get(handlers::people_stats))
        .route(
            "/people/{id}",
            get(handlers::get_person)
                .put(handlers::update_person)
                .patch(handlers::patch_person)
                .delete(handlers::delete_person),
        )
        // Must come after every `.route` so each method router picks it up.
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .fallback(handlers::not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
