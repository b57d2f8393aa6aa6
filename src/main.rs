//! Grid Hunt - CLI
//!
//! Finds every dictionary word traceable on a Boggle-style letter grid,
//! using a trie-pruned backtracking search.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gridhunt::{
    commands::{SolveConfig, run_benchmark, solve_board},
    output::{print_benchmark_result, print_solve_result},
    wordlists::{WORDS, loader},
};

#[derive(Parser)]
#[command(
    name = "gridhunt",
    about = "Boggle-style word grid solver using a trie-pruned backtracking search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Wordlist: 'embedded' (default) or path to a one-word-per-line file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Find all dictionary words on a board
    Solve {
        /// Board letters as a single row-major string, e.g. "meowpurryowlhiss"
        board: String,

        /// Minimum word length to report (0 reports everything)
        #[arg(short, long, default_value = "4")]
        min_length: usize,

        /// Fan start cells out across threads
        #[arg(short, long)]
        parallel: bool,
    },

    /// Benchmark the search over random boards
    Benchmark {
        /// Number of random boards to search
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Board side length
        #[arg(short, long, default_value = "4")]
        side: usize,

        /// Fan start cells out across threads
        #[arg(short, long)]
        parallel: bool,
    },
}

/// Load the dictionary based on the -w flag
fn load_wordlist(wordlist_mode: &str) -> Result<Vec<String>> {
    match wordlist_mode {
        "embedded" => Ok(loader::words_from_slice(WORDS)),
        path => loader::load_from_file(path).with_context(|| format!("Failed to load {path}")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_wordlist(&cli.wordlist)?;

    match cli.command {
        Commands::Solve {
            board,
            min_length,
            parallel,
        } => {
            let config = SolveConfig {
                board,
                min_length: (min_length > 0).then_some(min_length),
                parallel,
            };
            let result = solve_board(&config, &dictionary).map_err(|e| anyhow::anyhow!(e))?;
            print_solve_result(&result);
            Ok(())
        }
        Commands::Benchmark {
            count,
            side,
            parallel,
        } => {
            println!("Searching {count} random {side}×{side} boards...");
            let result = run_benchmark(&dictionary, side, count, parallel);
            print_benchmark_result(&result);
            Ok(())
        }
    }
}
