//! Rendering: draws one frame of the board through a surface abstraction.
//!
//! The only primitives a frame needs are clear-to-color and filled circle,
//! so [`Surface`] has exactly those two. Hosts provide the pixels (the CLI
//! renders into a terminal cell grid); tests record calls. Rendering reads
//! client state and never mutates it, and it never suspends.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::client::BoardClient;
use crate::consts::{BACKGROUND_COLOR, DOT_DIAMETER};

/// A drawing surface the board can be rendered onto.
pub trait Surface {
    /// Fill the whole surface with `color`.
    fn clear(&mut self, color: &str);

    /// Draw a filled circle of `diameter` centered at `(x, y)`. No stroke.
    fn fill_circle(&mut self, x: f64, y: f64, diameter: f64, color: &str);
}

/// Draw one frame: clear to the background color, then every point in
/// insertion order as a fixed-diameter dot in its own color.
pub fn draw(client: &BoardClient, surface: &mut dyn Surface) {
    surface.clear(BACKGROUND_COLOR);
    for point in client.points() {
        surface.fill_circle(point.x, point.y, DOT_DIAMETER, &point.color);
    }
}
