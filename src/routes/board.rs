//! Board endpoints: append, snapshot, clear.
//!
//! Handlers are infallible: the board is in memory, and the only failure mode
//! (malformed JSON) is rejected by the `Json` extractor before the handler
//! runs. Add and clear return an empty `200`; clients never read their bodies.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::{debug, info};

use crate::state::{AppState, Point};

/// `POST /board/add` — append one point to the board.
pub async fn add_point(State(state): State<AppState>, Json(point): Json<Point>) -> StatusCode {
    let mut board = state.board.write().await;
    board.push(point);
    debug!(total = board.len(), "point added");
    StatusCode::OK
}

/// `GET /board/points` — the full board, in insertion order.
pub async fn list_points(State(state): State<AppState>) -> Json<Vec<Point>> {
    let board = state.board.read().await;
    Json(board.clone())
}

/// `DELETE /board/clear` — drop every point.
pub async fn clear_points(State(state): State<AppState>) -> StatusCode {
    let mut board = state.board.write().await;
    let dropped = board.len();
    board.clear();
    info!(dropped, "board cleared");
    StatusCode::OK
}

#[cfg(test)]
#[path = "board_test.rs"]
mod tests;
