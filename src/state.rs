//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the one shared board: an insertion-ordered list of points behind an
//! async `RwLock` (concurrent reads, exclusive writes). Nothing is persisted;
//! the board lives and dies with the process.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

// =============================================================================
// POINT
// =============================================================================

/// A single drawn dot as stored on the board and sent on the wire.
///
/// Points carry no identity: duplicates are permitted, and insertion order
/// alone decides render order on the clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    /// CSS color string, e.g. `"rgb(120,40,200)"`.
    pub color: String,
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — the board is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    /// Every point drawn since startup (or the last clear), in insertion order.
    pub board: Arc<RwLock<Vec<Point>>>,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self { board: Arc::new(RwLock::new(Vec::new())) }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
