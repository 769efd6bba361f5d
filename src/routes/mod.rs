//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the three board endpoints plus the health check under a single Axum
//! router. CORS is permissive so clients served from other origins can reach
//! the API; the trace layer logs every request through `tracing`.

pub mod board;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/board/add", post(board::add_point))
        .route("/board/points", get(board::list_points))
        .route("/board/clear", delete(board::clear_points))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
