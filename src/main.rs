//! Peg Solitaire Solver - CLI
//!
//! Finds jump sequences that clear a peg-solitaire board down to one peg or
//! its goal cells, with an animated TUI to watch the search and the solution.

use anyhow::Result;
use clap::{Parser, Subcommand};
use peg_solitaire::{
    commands::{SolveConfig, inspect_layout, run_solve},
    layouts::{self, loader::load_from_file},
    output::{print_layout_info, print_solve_result},
};
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "peg_solitaire",
    about = "Peg solitaire solver using exhaustive depth-first backtracking",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Layout: 'english' (default), 'french', or path to a layout file
    #[arg(short = 'l', long, global = true, default_value = "english")]
    layout: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Watch the search and the solution animated in a TUI (default)
    Watch {
        /// Redraw every Nth search event
        #[arg(short = 'n', long, default_value = "512")]
        frame_every: u64,

        /// Delay between replayed moves in milliseconds
        #[arg(short, long, default_value = "250")]
        delay: u64,
    },

    /// Solve a layout and print the move sequence
    Solve {
        /// Show search statistics
        #[arg(short, long)]
        verbose: bool,

        /// Hide the progress spinner while searching
        #[arg(short, long)]
        quiet: bool,
    },

    /// Print a parsed layout and its properties without solving
    Show,
}

/// Resolve the -l flag to layout rows
fn load_layout(name: &str) -> Result<Vec<String>> {
    match name {
        "english" => Ok(preset_rows(layouts::ENGLISH)),
        "french" => Ok(preset_rows(layouts::FRENCH)),
        path => Ok(load_from_file(path)?),
    }
}

fn preset_rows(preset: &[&str]) -> Vec<String> {
    preset.iter().map(|&row| row.to_string()).collect()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let layout = load_layout(&cli.layout)?;

    // Default to watch mode if no command given
    let command = cli.command.unwrap_or(Commands::Watch {
        frame_every: 512,
        delay: 250,
    });

    match command {
        Commands::Watch { frame_every, delay } => run_watch_command(layout, frame_every, delay),
        Commands::Solve { verbose, quiet } => run_solve_command(&layout, verbose, quiet),
        Commands::Show => run_show_command(&layout),
    }
}

fn run_watch_command(layout: Vec<String>, frame_every: u64, delay: u64) -> Result<()> {
    use peg_solitaire::interactive::{App, run_tui};

    let mut app = App::new(layout)?;
    app.frame_every = frame_every.max(1);
    app.replay_delay = Duration::from_millis(delay);
    run_tui(app)
}

fn run_solve_command(layout: &[String], verbose: bool, quiet: bool) -> Result<()> {
    let mut config = SolveConfig::new(layout);
    config.progress = !quiet;

    let result = run_solve(&config).map_err(|e| anyhow::anyhow!(e))?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_show_command(layout: &[String]) -> Result<()> {
    let info = inspect_layout(layout).map_err(|e| anyhow::anyhow!(e))?;
    print_layout_info(&info);
    Ok(())
}
