//! Grid search algorithms
//!
//! The multi-source backtracking search that walks the grid and the
//! dictionary trie in lock-step, plus the letter-set pre-pass and a
//! parallel variant that fans start cells out across threads.

mod engine;
mod filter;
mod parallel;

pub use engine::{DIRECTIONS, find_words};
pub use filter::{LetterSet, filter_dictionary};
pub use parallel::find_words_parallel;
