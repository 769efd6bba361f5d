//! Terminal rendering surface.
//!
//! Maps the 640x480 board onto a character cell grid and renders each dot as
//! a colored glyph using 24-bit ANSI escapes. At terminal scale a dot covers
//! a single cell regardless of its pixel diameter; points outside the board
//! bounds are simply not visible, same as on a real canvas.

#[cfg(test)]
#[path = "term_test.rs"]
mod term_test;

use board::color;
use board::consts::{BOARD_HEIGHT, BOARD_WIDTH};
use board::render::Surface;

/// Glyph drawn for an occupied cell.
const DOT_GLYPH: char = '●';

/// Glyph drawn for a background cell.
const BACKGROUND_GLYPH: char = '·';

/// A fixed-size cell grid the board renders into.
pub struct TermSurface {
    cols: usize,
    rows: usize,
    /// Row-major cell colors; `None` is background.
    cells: Vec<Option<(u8, u8, u8)>>,
}

impl TermSurface {
    #[must_use]
    pub fn new(cols: usize, rows: usize) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self { cols, rows, cells: vec![None; cols * rows] }
    }

    /// Map board pixels to a cell index. Out-of-bounds and non-finite
    /// positions map to nothing.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
    fn cell_index(&self, x: f64, y: f64) -> Option<usize> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        if x < 0.0 || y < 0.0 || x >= BOARD_WIDTH || y >= BOARD_HEIGHT {
            return None;
        }
        let col = (((x / BOARD_WIDTH) * self.cols as f64) as usize).min(self.cols - 1);
        let row = (((y / BOARD_HEIGHT) * self.rows as f64) as usize).min(self.rows - 1);
        Some(row * self.cols + col)
    }

    /// Render the grid as ANSI-colored text, one line per row.
    #[must_use]
    pub fn frame(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() * 4 + self.rows);
        for row in 0..self.rows {
            for col in 0..self.cols {
                match self.cells[row * self.cols + col] {
                    Some((r, g, b)) => {
                        out.push_str(&format!("\x1b[38;2;{r};{g};{b}m{DOT_GLYPH}\x1b[0m"));
                    }
                    None => out.push(BACKGROUND_GLYPH),
                }
            }
            out.push('\n');
        }
        out
    }

    #[cfg(test)]
    fn cell(&self, col: usize, row: usize) -> Option<(u8, u8, u8)> {
        self.cells[row * self.cols + col]
    }
}

impl Surface for TermSurface {
    fn clear(&mut self, _color: &str) {
        // The grid has one background; the clear color maps to empty cells.
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    fn fill_circle(&mut self, x: f64, y: f64, _diameter: f64, color: &str) {
        let Some(index) = self.cell_index(x, y) else {
            return;
        };
        let rgb = color::parse_rgb(color).unwrap_or((0, 0, 0));
        self.cells[index] = Some(rgb);
    }
}
