//! Intensity grid for a one-year contribution canvas.
//!
//! Rows are days of the week (Sunday first), columns are weeks. Cells hold a
//! small integer intensity; 0 means no activity. Cells are stored row-major
//! in a flat buffer, with nested rows only at the serialization boundary.

use crate::error::CanvasError;

/// Highest paintable intensity. Cell values live in `0..=MAX_INTENSITY`.
pub const MAX_INTENSITY: u8 = 4;

/// Rectangular matrix of cell intensities with fixed dimensions.
///
/// Dimensions never change after construction; loading a pattern file builds
/// a fresh grid rather than resizing an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Create an all-zero grid. Both dimensions must be positive.
    pub fn new(height: usize, width: usize) -> Result<Self, CanvasError> {
        if height == 0 || width == 0 {
            return Err(CanvasError::InvalidDimensions { height, width });
        }
        Ok(Self {
            height,
            width,
            cells: vec![0; height * width],
        })
    }

    /// Build a grid from nested rows, validating shape and cell range.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, CanvasError> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(CanvasError::InvalidDimensions { height, width });
        }
        let mut cells = Vec::with_capacity(height * width);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != width {
                return Err(CanvasError::RaggedRow {
                    row,
                    expected: width,
                    got: values.len(),
                });
            }
            for &value in values {
                if value > MAX_INTENSITY {
                    return Err(CanvasError::IntensityOutOfRange {
                        intensity: value,
                        max: MAX_INTENSITY,
                    });
                }
                cells.push(value);
            }
        }
        Ok(Self {
            height,
            width,
            cells,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Current intensity of a cell; `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.check(row, col).ok()?;
        Some(self.cells[self.index(row, col)])
    }

    /// Set a cell to a specific intensity.
    pub fn set(&mut self, row: usize, col: usize, intensity: u8) -> Result<(), CanvasError> {
        if intensity > MAX_INTENSITY {
            return Err(CanvasError::IntensityOutOfRange {
                intensity,
                max: MAX_INTENSITY,
            });
        }
        self.check(row, col)?;
        let i = self.index(row, col);
        self.cells[i] = intensity;
        Ok(())
    }

    /// Advance a cell to the next intensity, wrapping from the maximum back
    /// to 0. Returns the new value.
    pub fn cycle(&mut self, row: usize, col: usize) -> Result<u8, CanvasError> {
        self.check(row, col)?;
        let i = self.index(row, col);
        self.cells[i] = (self.cells[i] + 1) % (MAX_INTENSITY + 1);
        Ok(self.cells[i])
    }

    /// Reset a single cell to 0.
    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), CanvasError> {
        self.set(row, col, 0)
    }

    /// Reset every cell to 0.
    pub fn clear_all(&mut self) {
        self.cells.fill(0);
    }

    /// Nested-rows view for serialization.
    pub fn rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.width)
            .map(|chunk| chunk.to_vec())
            .collect()
    }

    /// Paint a binary mask onto the grid with its top-left corner at column
    /// `start_week`. Nonzero mask cells are set to `intensity`; mask cells
    /// falling past the right edge are dropped.
    pub fn stamp(
        &mut self,
        mask: &[Vec<u8>],
        start_week: usize,
        intensity: u8,
    ) -> Result<(), CanvasError> {
        if intensity > MAX_INTENSITY {
            return Err(CanvasError::IntensityOutOfRange {
                intensity,
                max: MAX_INTENSITY,
            });
        }
        for (row, mask_row) in mask.iter().enumerate().take(self.height) {
            for (offset, &marked) in mask_row.iter().enumerate() {
                if marked == 0 {
                    continue;
                }
                let col = start_week + offset;
                if col >= self.width {
                    continue;
                }
                let i = self.index(row, col);
                self.cells[i] = intensity;
            }
        }
        Ok(())
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    fn check(&self, row: usize, col: usize) -> Result<(), CanvasError> {
        if row >= self.height || col >= self.width {
            return Err(CanvasError::CellOutOfBounds {
                row,
                col,
                height: self.height,
                width: self.width,
            });
        }
        Ok(())
    }
}
