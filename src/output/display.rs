//! Display functions for command results

use super::formatters::{format_move_list, piece_bar};
use crate::commands::{LayoutInfo, SolveResult};
use colored::Colorize;

/// Print the result of solving a layout
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());

    if result.solved {
        println!(
            "{}",
            format!("✅ Solved in {} moves", result.moves.len())
                .green()
                .bold()
        );

        if result.moves.is_empty() {
            println!("The starting layout is already a winning configuration.");
        }
        for line in format_move_list(&result.moves) {
            println!("  {line}");
        }

        println!("\nFinal board:");
        print!("{}", result.final_board);
    } else {
        println!("{}", "❌ Board can't be solved".red().bold());
        println!(
            "Exhausted every jump sequence from {} pegs.",
            result.initial_pieces
        );
    }

    if verbose {
        let seconds = result.duration.as_secs_f64();
        let rate = if seconds > 0.0 {
            result.moves_tried as f64 / seconds
        } else {
            0.0
        };

        println!("\n{}", "Search:".bright_cyan().bold());
        println!("   Moves tried:   {}", result.moves_tried);
        println!("   Backtracks:    {}", result.backtracks);
        println!("   Time taken:    {seconds:.2}s");
        println!("   Moves/second:  {rate:.0}");
    }
}

/// Print the properties of a parsed layout
pub fn print_layout_info(info: &LayoutInfo) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "LAYOUT".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!();
    print!("{}", info.rendered);

    println!(
        "\nSize:  {} rows x {} columns",
        info.height, info.width
    );
    println!(
        "Pegs:  [{}] {}",
        piece_bar(info.pieces, 36).green(),
        info.pieces.to_string().bright_yellow()
    );

    if info.goals.is_empty() {
        println!("Goals: none (any single surviving peg wins)");
    } else {
        let positions: Vec<String> = info.goals.iter().map(ToString::to_string).collect();
        println!("Goals: {}", positions.join(", "));
    }

    if info.already_solved {
        println!("{}", "Already solved as given.".green());
    }
}
