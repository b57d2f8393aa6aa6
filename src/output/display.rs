//! Display functions for command results

use super::formatters::{columnize, create_progress_bar};
use crate::commands::{BenchmarkResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a board
pub fn print_solve_result(result: &SolveResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Board ({}×{}, {} cells):",
        result.grid.width(),
        result.grid.width(),
        result.grid.len()
    );
    for line in result.grid.to_string().lines() {
        println!("  {}", line.bright_yellow().bold());
    }
    println!("{}", "─".repeat(60).cyan());
    println!(
        "Dictionary: {} words ({} after letter filter)",
        result.dictionary_size, result.candidates
    );

    if result.total_found == 0 {
        println!("\n{}", "No words found.".yellow());
        return;
    }

    for (length, group) in &result.words_by_length {
        println!(
            "\n{}",
            format!("{length} LETTER WORDS ({})", group.len())
                .bright_cyan()
                .bold()
        );
        println!("{}", columnize(group, 6));
    }

    println!(
        "\n{}",
        format!(
            "✅ Found {} words in {:.2}ms",
            result.total_found,
            result.duration.as_secs_f64() * 1000.0
        )
        .green()
        .bold()
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!(
        "   Boards searched:  {} ({}×{})",
        result.boards, result.board_side, result.board_side
    );
    println!("   Dictionary size:  {}", result.dictionary_size);
    println!(
        "   Average found:    {}",
        format!("{:.1}", result.average_found).bright_yellow().bold()
    );
    println!(
        "   Fewest found:     {}",
        format!("{}", result.min_found).yellow()
    );
    println!(
        "   Most found:       {}",
        format!("{}", result.max_found).green()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Boards/second:    {:.1}", result.boards_per_second);

    let bar = create_progress_bar(result.average_found, result.max_found as f64, 30);
    println!("\n   Avg vs best: [{}]", bar.green());
}
