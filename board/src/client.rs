//! The board client: local view of the shared board.
//!
//! DESIGN
//! ======
//! `BoardClient` owns the session's point list and color outright — no
//! globals, no singleton. It performs no I/O: a drag event appends
//! locally and hands the new point back to the host for submission, and the
//! host pushes poll results in via [`BoardClient::apply_snapshot`]. The host
//! holds the client `&mut`, so callbacks can never interleave.
//!
//! Every mutation is a single append, replace, or clear — no multi-step
//! mutation spans a suspension point in any host.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use crate::color;
use crate::point::Point;

/// Local view of the shared board: the drawn points and the session color.
pub struct BoardClient {
    /// All locally visible points, in render order.
    points: Vec<Point>,
    /// Fixed for the lifetime of the session.
    user_color: String,
}

impl BoardClient {
    /// Create an empty client with a freshly generated user color.
    #[must_use]
    pub fn new() -> Self {
        Self::with_color(color::random_user_color())
    }

    /// Create an empty client with a fixed user color.
    #[must_use]
    pub fn with_color(user_color: String) -> Self {
        Self { points: Vec::new(), user_color }
    }

    /// The session's user color, stamped on every locally drawn point.
    #[must_use]
    pub fn user_color(&self) -> &str {
        &self.user_color
    }

    /// All points in render order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points currently on the local board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the local board is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Drag gesture at `(x, y)`: append a point in the session color and
    /// return a copy for the host to submit. The append is optimistic and is
    /// never rolled back if submission later fails; a diverged local view
    /// lasts until the next successful poll overwrites it.
    pub fn on_drag(&mut self, x: f64, y: f64) -> Point {
        let point = Point::new(x, y, self.user_color.clone());
        self.points.push(point.clone());
        point
    }

    /// Replace the whole collection with a server snapshot. No merge: local
    /// points the server hasn't caught up to are discarded until a later poll
    /// returns them.
    pub fn apply_snapshot(&mut self, points: Vec<Point>) {
        self.points = points;
    }

    /// Drop every point. Called by the host only after the server
    /// acknowledged a clear.
    pub fn apply_clear(&mut self) {
        self.points.clear();
    }
}

impl Default for BoardClient {
    fn default() -> Self {
        Self::new()
    }
}
