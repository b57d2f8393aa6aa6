//! Parallel grid search
//!
//! The per-start-cell traversals are independent: each owns its visited set
//! and prefix, and they only read the shared immutable trie and grid. That
//! makes start cells a natural unit of parallel work; per-worker found sets
//! are merged at the end, so the traversal itself never contends on a lock.

use rayon::prelude::*;
use rustc_hash::FxHashSet;

use super::engine::{Walker, apply_min_length, sorted_starts};
use super::filter::{LetterSet, filter_dictionary};
use crate::core::{Grid, Trie};

/// Parallel variant of [`find_words`](super::find_words)
///
/// Produces the identical set as the serial engine; only the scheduling of
/// start cells differs. Worth using for large boards or large dictionaries.
#[must_use]
pub fn find_words_parallel<S: AsRef<str> + Sync>(
    grid: &Grid,
    dictionary: &[S],
    min_length: Option<usize>,
) -> FxHashSet<String> {
    if grid.is_empty() || dictionary.is_empty() {
        return FxHashSet::default();
    }

    let candidates = filter_dictionary(dictionary, LetterSet::from_grid(grid));
    let trie = Trie::from_words(&candidates);

    let Some(bounds) = grid.bounds() else {
        return FxHashSet::default();
    };

    // Trie and grid are fully built and immutable before any worker starts
    let found = sorted_starts(grid)
        .par_iter()
        .map(|&start| {
            let mut walker = Walker::new(grid, bounds);
            walker.walk(start, trie.root());
            walker.into_found()
        })
        .reduce(FxHashSet::default, |mut merged, found| {
            merged.extend(found);
            merged
        });

    apply_min_length(found, min_length)
}
