use lawnpaint_core::render::{render_text, RenderStyle};
use lawnpaint_core::storage::{self, PatternFile};

pub fn run(pattern: &str) -> Result<(), Box<dyn std::error::Error>> {
    let path = storage::resolve_pattern_path(pattern)?;
    let grid = PatternFile::load_grid(&path)?;
    print!("{}", render_text(&grid, RenderStyle::Shaded));
    Ok(())
}
