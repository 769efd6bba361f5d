//! Session user-color generation and parsing.
//!
//! Every session draws one random color at startup and stamps it on every
//! point it creates. The color never changes for the lifetime of the session.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use rand::Rng;

use crate::consts::{COLOR_CHANNEL_MAX, COLOR_CHANNEL_MIN};

/// Generate a session color: `rgb(r,g,b)` with each channel drawn uniformly
/// from `[COLOR_CHANNEL_MIN, COLOR_CHANNEL_MAX)`.
#[must_use]
pub fn random_user_color() -> String {
    let mut rng = rand::rng();
    let r: u8 = rng.random_range(COLOR_CHANNEL_MIN..COLOR_CHANNEL_MAX);
    let g: u8 = rng.random_range(COLOR_CHANNEL_MIN..COLOR_CHANNEL_MAX);
    let b: u8 = rng.random_range(COLOR_CHANNEL_MIN..COLOR_CHANNEL_MAX);
    format!("rgb({r},{g},{b})")
}

/// Parse an `rgb(r,g,b)` string into its channels.
///
/// Returns `None` for anything that isn't exactly that shape (hex colors,
/// named colors, alpha channels, out-of-range values).
#[must_use]
pub fn parse_rgb(color: &str) -> Option<(u8, u8, u8)> {
    let inner = color.strip_prefix("rgb(")?.strip_suffix(')')?;
    let mut channels = inner.splitn(3, ',');
    let r = channels.next()?.trim().parse::<u8>().ok()?;
    let g = channels.next()?.trim().parse::<u8>().ok()?;
    let b = channels.next()?.trim().parse::<u8>().ok()?;
    Some((r, g, b))
}
