//! Shared numeric constants for the board crate.

// ── Board geometry ──────────────────────────────────────────────

/// Drawing surface width in pixels.
pub const BOARD_WIDTH: f64 = 640.0;

/// Drawing surface height in pixels.
pub const BOARD_HEIGHT: f64 = 480.0;

// ── Rendering ───────────────────────────────────────────────────

/// Diameter of a drawn dot in pixels. Dots are filled circles, no stroke.
pub const DOT_DIAMETER: f64 = 12.0;

/// Color the surface is cleared to at the start of every frame.
pub const BACKGROUND_COLOR: &str = "rgb(255,255,255)";

// ── User colors ─────────────────────────────────────────────────

/// Inclusive lower bound for each generated user-color channel. Keeps
/// session colors visible against the white background.
pub const COLOR_CHANNEL_MIN: u8 = 50;

/// Exclusive upper bound for each generated user-color channel.
pub const COLOR_CHANNEL_MAX: u8 = 255;
