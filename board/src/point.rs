//! The point model: a single drawn dot and its wire representation.

#[cfg(test)]
#[path = "point_test.rs"]
mod point_test;

use serde::{Deserialize, Serialize};

/// A single drawn dot with position and color.
///
/// Points are immutable once created and carry no identity: the board allows
/// duplicates, and insertion order alone decides render order. The serde
/// shape is the wire contract for all three board endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal pixel coordinate.
    pub x: f64,
    /// Vertical pixel coordinate.
    pub y: f64,
    /// CSS color string, e.g. `"rgb(120,40,200)"`.
    pub color: String,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64, color: impl Into<String>) -> Self {
        Self { x, y, color: color.into() }
    }
}
