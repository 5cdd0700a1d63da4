//! Core error types for lawnpaint-core.
//!
//! One error enum per concern, gathered under [`CoreError`] with `#[from]`
//! conversions so callers can use `?` across module boundaries.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for lawnpaint-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Canvas precondition violations
    #[error("Canvas error: {0}")]
    Canvas(#[from] CanvasError),

    /// Calendar mapping errors
    #[error("Calendar error: {0}")]
    Calendar(#[from] CalendarError),

    /// Commit policy configuration errors
    #[error("Policy error: {0}")]
    Policy(#[from] PolicyError),

    /// Pattern file load/save errors
    #[error("Pattern error: {0}")]
    Pattern(#[from] PatternError),

    /// Commit sink errors
    #[error("Commit sink error: {0}")]
    Sink(#[from] SinkError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Canvas-specific errors. Local precondition violations; callers keep them
/// unreachable by clamping intensities and wrapping cursor moves.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CanvasError {
    /// Grid dimensions must both be positive
    #[error("grid dimensions must be positive (got {height}x{width})")]
    InvalidDimensions { height: usize, width: usize },

    /// Intensity above the paintable maximum
    #[error("intensity {intensity} exceeds maximum {max}")]
    IntensityOutOfRange { intensity: u8, max: u8 },

    /// Cell coordinates outside the grid
    #[error("cell ({row}, {col}) out of bounds for {height}x{width} grid")]
    CellOutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },

    /// Row of unexpected length during grid construction
    #[error("row {row} has {got} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },
}

/// Calendar-specific errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CalendarError {
    /// Year outside what chrono can represent
    #[error("year {0} is outside the supported calendar range")]
    YearOutOfRange(i32),
}

/// Commit policy configuration errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PolicyError {
    /// Commit-count bands must be non-empty, disjoint, and increasing
    #[error("commit bands must be non-empty, disjoint and increasing (band {index}: {low}..={high})")]
    InvalidBands { index: usize, low: u32, high: u32 },

    /// Working-hour window must be an inclusive range within the day
    #[error("working hours must satisfy start <= end within 0..=23 (got {start}..={end})")]
    InvalidHours { start: u8, end: u8 },
}

/// Pattern file errors.
#[derive(Error, Debug)]
pub enum PatternError {
    /// Pattern file missing on load
    #[error("pattern file not found: {0}")]
    NotFound(PathBuf),

    /// Pattern file present but structurally invalid
    #[error("malformed pattern file {path}: {reason}")]
    Malformed { path: PathBuf, reason: String },

    /// Pattern file could not be encoded
    #[error("failed to encode pattern file: {0}")]
    Encode(#[from] serde_json::Error),

    /// Underlying filesystem failure
    #[error("failed to access pattern file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Commit sink errors.
#[derive(Error, Debug)]
pub enum SinkError {
    /// Marker file could not be appended to
    #[error("failed to update marker file {path}: {source}")]
    MarkerWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The sink's command could not be spawned
    #[error("failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The sink's command ran and reported failure
    #[error("`{command}` exited with status {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: i32,
        stderr: String,
    },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config directory could not be determined or created
    #[error("cannot prepare configuration directory: {0}")]
    Dir(String),

    /// Failed to load configuration
    #[error("failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Key does not name an existing configuration field
    #[error("unknown configuration key: {0}")]
    UnknownKey(String),

    /// Value cannot be parsed into the field's type
    #[error("cannot parse '{value}' for configuration key '{key}'")]
    InvalidValue { key: String, value: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
