//! Board solving command
//!
//! Builds a grid from a board string, runs the search, and groups the
//! results by word length for display.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use crate::core::Grid;
use crate::search::{LetterSet, filter_dictionary, find_words, find_words_parallel};

/// Configuration for solving a board
pub struct SolveConfig {
    pub board: String,
    /// Minimum word length to report; `None` reports everything
    pub min_length: Option<usize>,
    /// Fan start cells out across threads
    pub parallel: bool,
}

impl SolveConfig {
    /// Default configuration: report words of length 4 and up, serial search
    #[must_use]
    pub const fn new(board: String) -> Self {
        Self {
            board,
            min_length: Some(4),
            parallel: false,
        }
    }
}

/// Result of solving a board
pub struct SolveResult {
    pub grid: Grid,
    pub dictionary_size: usize,
    /// Candidates remaining after the letter-set pre-pass
    pub candidates: usize,
    /// Found words grouped by length, alphabetical within a group
    pub words_by_length: BTreeMap<usize, Vec<String>>,
    pub total_found: usize,
    pub duration: Duration,
}

/// Solve a board against a dictionary
///
/// # Errors
///
/// Returns an error if the board string is invalid (non-alphabetic
/// characters or a zero-width derivation).
pub fn solve_board(config: &SolveConfig, dictionary: &[String]) -> Result<SolveResult, String> {
    let grid = Grid::build(&config.board).map_err(|e| format!("Invalid board: {e}"))?;

    let candidates = filter_dictionary(dictionary, LetterSet::from_grid(&grid)).len();

    let start = Instant::now();
    let found = if config.parallel {
        find_words_parallel(&grid, dictionary, config.min_length)
    } else {
        find_words(&grid, dictionary, config.min_length)
    };
    let duration = start.elapsed();

    let total_found = found.len();
    let mut words_by_length: BTreeMap<usize, Vec<String>> = BTreeMap::new();
    for word in found {
        words_by_length.entry(word.len()).or_default().push(word);
    }
    for group in words_by_length.values_mut() {
        group.sort_unstable();
    }

    Ok(SolveResult {
        grid,
        dictionary_size: dictionary.len(),
        candidates,
        words_by_length,
        total_found,
        duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Vec<String> {
        ["meow", "owl", "purr", "hiss", "row", "cat"]
            .iter()
            .map(std::string::ToString::to_string)
            .collect()
    }

    #[test]
    fn solve_groups_words_by_length() {
        let mut config = SolveConfig::new("meowpurryowlhiss".to_string());
        config.min_length = None;

        let result = solve_board(&config, &dictionary()).unwrap();

        assert_eq!(result.words_by_length[&3], vec!["owl", "row"]);
        let four: &[String] = &result.words_by_length[&4];
        assert_eq!(four, ["hiss", "meow", "purr"]);
        assert_eq!(result.total_found, 5);
    }

    #[test]
    fn solve_default_min_length_hides_short_words() {
        let config = SolveConfig::new("meowpurryowlhiss".to_string());
        let result = solve_board(&config, &dictionary()).unwrap();

        assert!(!result.words_by_length.contains_key(&3));
        assert_eq!(result.total_found, 3);
    }

    #[test]
    fn solve_reports_prefilter_size() {
        let mut config = SolveConfig::new("meowpurryowlhiss".to_string());
        config.min_length = None;

        let result = solve_board(&config, &dictionary()).unwrap();

        assert_eq!(result.dictionary_size, 6);
        // "cat" needs letters the board does not have
        assert_eq!(result.candidates, 5);
    }

    #[test]
    fn solve_parallel_matches_serial() {
        let mut serial = SolveConfig::new("meowpurryowlhiss".to_string());
        serial.min_length = None;
        let mut parallel = SolveConfig::new("meowpurryowlhiss".to_string());
        parallel.min_length = None;
        parallel.parallel = true;

        let serial = solve_board(&serial, &dictionary()).unwrap();
        let parallel = solve_board(&parallel, &dictionary()).unwrap();

        assert_eq!(serial.words_by_length, parallel.words_by_length);
    }

    #[test]
    fn solve_invalid_board_returns_error() {
        let config = SolveConfig::new("me0w".to_string());
        assert!(solve_board(&config, &dictionary()).is_err());
    }

    #[test]
    fn solve_empty_board_finds_nothing() {
        let config = SolveConfig::new(String::new());
        let result = solve_board(&config, &dictionary()).unwrap();

        assert_eq!(result.total_found, 0);
        assert!(result.words_by_length.is_empty());
    }
}
