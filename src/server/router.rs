use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::server::handlers::{health, index, query};
use crate::state::AppState;

/// Creates the application router.
///
/// Two pipeline operations sit behind the API: building nodes from a
/// document and querying caller-supplied nodes. The caller owns the nodes
/// between the two calls; the server keeps nothing.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/index", post(index::build_index))
        .route("/api/query", post(query::query_index))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
