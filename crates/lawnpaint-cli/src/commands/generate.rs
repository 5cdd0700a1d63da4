use std::collections::BTreeSet;
use std::io::{self, BufRead, Write};

use chrono::Datelike;

use lawnpaint_core::plan;
use lawnpaint_core::render::{render_text, RenderStyle};
use lawnpaint_core::storage::{self, Config, PatternFile};
use lawnpaint_core::GitCommitSink;

pub fn run(pattern: &str, year: Option<i32>, yes: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();

    let path = storage::resolve_pattern_path(pattern)?;
    let grid = PatternFile::load_grid(&path)?;
    let year = year
        .or(config.generate.default_year)
        .unwrap_or_else(|| chrono::Utc::now().year());

    print!("{}", render_text(&grid, RenderStyle::Shaded));
    println!("target year: {year}");
    println!();

    if !yes && !confirm("create commits for this pattern? [y/N] ")? {
        println!("aborted");
        return Ok(());
    }

    let plan = plan::build_plan(&grid, year, config.generate.policy_config())?;
    if plan.is_empty() {
        println!("pattern is empty, nothing to commit");
        return Ok(());
    }

    let mut sink = GitCommitSink::new(
        ".",
        &config.generate.marker_file,
        &config.generate.message_prefix,
    );
    let total = plan.len();
    let done = plan::apply(&plan, &mut sink, |instruction| {
        println!(
            "created commit {} of {total}: {}",
            instruction.sequence,
            instruction.env_timestamp()
        );
    })?;

    let days: BTreeSet<_> = plan.iter().map(|i| i.date()).collect();
    println!();
    println!("done: {done} commits across {} days", days.len());
    println!("push with: git push -f origin main");
    Ok(())
}

fn confirm(prompt: &str) -> io::Result<bool> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}
