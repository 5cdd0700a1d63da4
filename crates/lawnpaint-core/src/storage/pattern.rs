//! JSON pattern file persistence.
//!
//! Format: `{ grid, width, height, created }` where `grid` holds `height`
//! rows of `width` intensities and `created` is an RFC 3339 timestamp.
//! Loading always takes dimensions from the file, never from prior in-memory
//! state.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::canvas::Grid;
use crate::error::PatternError;

/// Persisted form of a painted canvas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternFile {
    pub grid: Vec<Vec<u8>>,
    pub width: usize,
    pub height: usize,
    pub created: DateTime<Utc>,
}

impl PatternFile {
    /// Snapshot a grid, stamping the creation time.
    pub fn from_grid(grid: &Grid) -> Self {
        Self {
            grid: grid.rows(),
            width: grid.width(),
            height: grid.height(),
            created: Utc::now(),
        }
    }

    /// Write as pretty JSON, creating the containing directory if absent.
    pub fn save(&self, path: &Path) -> Result<(), PatternError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|source| PatternError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| PatternError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read a pattern file. Missing file is `NotFound`; a present file that
    /// lacks the required fields is `Malformed`.
    pub fn load(path: &Path) -> Result<Self, PatternError> {
        if !path.exists() {
            return Err(PatternError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path).map_err(|source| PatternError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|e| PatternError::Malformed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Load a pattern file and build its grid, cross-checking the declared
    /// dimensions against the grid array and rejecting out-of-range cells.
    pub fn load_grid(path: &Path) -> Result<Grid, PatternError> {
        let file = Self::load(path)?;
        if file.grid.len() != file.height
            || file.grid.iter().any(|row| row.len() != file.width)
        {
            return Err(PatternError::Malformed {
                path: path.to_path_buf(),
                reason: format!(
                    "header declares {}x{} but grid rows disagree",
                    file.height, file.width
                ),
            });
        }
        Grid::from_rows(file.grid).map_err(|e| PatternError::Malformed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}
