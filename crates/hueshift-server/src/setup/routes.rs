use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::handlers::{health::health, process::process_image};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/process", get(process_image))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
