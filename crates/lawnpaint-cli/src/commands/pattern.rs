use clap::Subcommand;

use lawnpaint_core::canvas::{stamps, Grid};
use lawnpaint_core::storage::{self, PatternFile};

#[derive(Subcommand)]
pub enum PatternAction {
    /// Write the stock tulip pattern
    Tulip {
        /// Start week for each tulip, comma-separated
        #[arg(long, value_delimiter = ',')]
        weeks: Option<Vec<usize>>,
        /// Intensity painted into mask cells
        #[arg(long, default_value = "3")]
        intensity: u8,
        /// Output pattern file name
        #[arg(long, default_value = "tulip.json")]
        out: String,
    },
    /// Write an empty canvas
    Blank {
        /// Number of week columns
        #[arg(long, default_value = "52")]
        weeks: usize,
        /// Output pattern file name
        #[arg(long, default_value = "pattern.json")]
        out: String,
    },
}

pub fn run(action: PatternAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        PatternAction::Tulip {
            weeks,
            intensity,
            out,
        } => {
            let mut grid = Grid::new(7, 52)?;
            let mask = stamps::tulip();
            for start in weeks.unwrap_or_else(stamps::tulip_weeks) {
                grid.stamp(&mask, start, intensity)?;
            }
            write(&grid, &out)
        }
        PatternAction::Blank { weeks, out } => {
            let grid = Grid::new(7, weeks)?;
            write(&grid, &out)
        }
    }
}

fn write(grid: &Grid, out: &str) -> Result<(), Box<dyn std::error::Error>> {
    let path = storage::resolve_pattern_path(out)?;
    PatternFile::from_grid(grid).save(&path)?;
    println!("wrote {}", path.display());
    Ok(())
}
