//! Benchmark command
//!
//! Times the search across randomly generated boards.

use rand::Rng;
use std::time::{Duration, Instant};

use crate::core::Grid;
use crate::search::{find_words, find_words_parallel};

/// Letter pool weighted roughly by English letter frequency, so random
/// boards produce realistic hit counts instead of consonant soup.
const LETTER_POOL: &[u8] = b"eeeeeeaaaaiiiiooonnnnrrrrttttllssssuuddggbbccmmppffhhvvwwyykjxqz";

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub boards: usize,
    pub board_side: usize,
    pub dictionary_size: usize,
    pub total_found: usize,
    pub average_found: f64,
    pub min_found: usize,
    pub max_found: usize,
    pub duration: Duration,
    pub boards_per_second: f64,
}

/// Run the search over `count` random `side`×`side` boards
///
/// Each board gets a fresh search (trie build included), matching the
/// one-grid-one-dictionary-per-invocation lifecycle of the engine.
///
/// # Panics
/// Will not panic - generated boards are lowercase alphabetic by
/// construction, so `Grid::build` cannot fail.
#[must_use]
pub fn run_benchmark(
    dictionary: &[String],
    side: usize,
    count: usize,
    parallel: bool,
) -> BenchmarkResult {
    let mut rng = rand::rng();

    let start = Instant::now();
    let mut total_found = 0;
    let mut min_found = usize::MAX;
    let mut max_found = 0;

    for _ in 0..count {
        let board: String = (0..side * side)
            .map(|_| LETTER_POOL[rng.random_range(0..LETTER_POOL.len())] as char)
            .collect();
        let grid = Grid::build(&board).expect("generated board is lowercase alphabetic");

        let found = if parallel {
            find_words_parallel(&grid, dictionary, None)
        } else {
            find_words(&grid, dictionary, None)
        };

        total_found += found.len();
        min_found = min_found.min(found.len());
        max_found = max_found.max(found.len());
    }

    let duration = start.elapsed();

    BenchmarkResult {
        boards: count,
        board_side: side,
        dictionary_size: dictionary.len(),
        total_found,
        average_found: if count == 0 {
            0.0
        } else {
            total_found as f64 / count as f64
        },
        min_found: if count == 0 { 0 } else { min_found },
        max_found,
        duration,
        boards_per_second: count as f64 / duration.as_secs_f64(),
    }
}
