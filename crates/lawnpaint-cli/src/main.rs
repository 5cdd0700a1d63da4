use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "lawnpaint-cli",
    version,
    about = "Paint a contribution calendar and replay it as git commits"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive canvas editor (the default)
    Edit,
    /// Render a pattern file to the terminal
    Preview {
        /// Pattern file (bare names resolve under patterns/)
        pattern: String,
    },
    /// Create git commits from a pattern file
    Generate {
        /// Pattern file (bare names resolve under patterns/)
        pattern: String,
        /// Target year (defaults to the configured or current year)
        year: Option<i32>,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Write a stock pattern file
    Pattern {
        #[command(subcommand)]
        action: commands::pattern::PatternAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        None | Some(Commands::Edit) => commands::edit::run(),
        Some(Commands::Preview { pattern }) => commands::preview::run(&pattern),
        Some(Commands::Generate { pattern, year, yes }) => {
            commands::generate::run(&pattern, year, yes)
        }
        Some(Commands::Pattern { action }) => commands::pattern::run(action),
        Some(Commands::Config { action }) => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
