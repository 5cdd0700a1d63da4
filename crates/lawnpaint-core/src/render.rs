//! Deterministic cell rendering.
//!
//! The core never touches a terminal API. It maps (grid, cursor, style) to
//! one glyph per cell; frontends decide how glyphs become screen output.

use serde::{Deserialize, Serialize};

use crate::canvas::{Cursor, Grid, MAX_INTENSITY};

/// Visual style for cells. Purely a rendering concern with no effect on grid
/// data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderStyle {
    /// Unicode shade ramp, one step per intensity.
    Shaded,
    /// Solid blocks; intensity is conveyed by color alone.
    Block,
}

impl RenderStyle {
    pub fn toggled(self) -> Self {
        match self {
            RenderStyle::Shaded => RenderStyle::Block,
            RenderStyle::Block => RenderStyle::Shaded,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RenderStyle::Shaded => "shaded",
            RenderStyle::Block => "block",
        }
    }
}

const SHADED_GLYPHS: [&str; 5] = ["⬜", "░░", "▒▒", "▓▓", "██"];
const BLOCK_GLYPHS: [&str; 5] = ["  ", "██", "██", "██", "██"];

/// Cursor marker in the shaded style; the block style marks the cursor by
/// color alone.
pub const CURSOR_GLYPH: &str = "◆◆";

/// Day-of-week labels, Sunday first, matching grid row order.
pub const DAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Two-column glyph for a single intensity.
pub fn glyph_for(intensity: u8, style: RenderStyle) -> &'static str {
    let level = usize::from(intensity.min(MAX_INTENSITY));
    match style {
        RenderStyle::Shaded => SHADED_GLYPHS[level],
        RenderStyle::Block => BLOCK_GLYPHS[level],
    }
}

/// One rendered cell: position, glyph, and the attributes frontends color by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellGlyph {
    pub row: usize,
    pub col: usize,
    pub glyph: &'static str,
    pub intensity: u8,
    pub is_cursor: bool,
}

/// One glyph per cell, row-major. Pure function of its inputs: the same
/// (grid, cursor, style) always yields the same glyphs.
pub fn cell_glyphs(grid: &Grid, cursor: Option<Cursor>, style: RenderStyle) -> Vec<CellGlyph> {
    let mut cells = Vec::with_capacity(grid.height() * grid.width());
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            let intensity = grid.get(row, col).unwrap_or(0);
            let is_cursor = cursor.is_some_and(|c| c.row == row && c.col == col);
            let glyph = if is_cursor && style == RenderStyle::Shaded {
                CURSOR_GLYPH
            } else {
                glyph_for(intensity, style)
            };
            cells.push(CellGlyph {
                row,
                col,
                glyph,
                intensity,
                is_cursor,
            });
        }
    }
    cells
}

/// Render the whole grid as text for the preview command. Rows carry
/// day-of-week labels when the grid has the conventional seven rows.
pub fn render_text(grid: &Grid, style: RenderStyle) -> String {
    let mut output = String::new();
    for row in 0..grid.height() {
        if grid.height() == DAY_LABELS.len() {
            output.push_str(&format!("{:<4}", DAY_LABELS[row]));
        }
        for col in 0..grid.width() {
            output.push_str(glyph_for(grid.get(row, col).unwrap_or(0), style));
        }
        output.push('\n');
    }
    output.push_str(&format!(
        "{} weeks x {} days\n",
        grid.width(),
        grid.height()
    ));
    output
}
