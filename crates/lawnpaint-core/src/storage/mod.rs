mod config;
pub mod pattern;

pub use config::{Config, EditorConfig, GenerateConfig};
pub use pattern::PatternFile;

use std::path::{Path, PathBuf};

/// Fixed directory pattern files live in, relative to the invocation
/// directory. Created on demand.
pub fn patterns_dir() -> std::io::Result<PathBuf> {
    let dir = PathBuf::from("patterns");
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Resolve a pattern file argument: bare names live under `patterns/`,
/// anything with a path separator is used as-is.
pub fn resolve_pattern_path(name: &str) -> std::io::Result<PathBuf> {
    let path = Path::new(name);
    if path.components().count() > 1 {
        Ok(path.to_path_buf())
    } else {
        Ok(patterns_dir()?.join(path))
    }
}

/// Returns `~/.config/lawnpaint[-dev]/` based on LAWNPAINT_ENV.
///
/// Set LAWNPAINT_ENV=dev to use a separate development config directory.
pub fn config_dir() -> std::io::Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("LAWNPAINT_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("lawnpaint-dev")
    } else {
        base_dir.join("lawnpaint")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
