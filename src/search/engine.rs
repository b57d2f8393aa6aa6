//! The grid search engine
//!
//! A depth-first, backtracking traversal launched from every cell of the
//! grid, walking the dictionary trie in lock-step with grid adjacency. A
//! branch dies the instant no dictionary word continues with the next
//! letter, which bounds the traversal by trie fan-out rather than
//! dictionary size.

use rustc_hash::FxHashSet;

use super::filter::{LetterSet, filter_dictionary};
use crate::core::{Coord, Grid, Trie, TrieNode};

/// The 8 neighbor offsets: 4 orthogonal then 4 diagonal
///
/// The order is fixed so traversal is deterministic; it does not affect the
/// result set.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Find every dictionary word traceable as a path of adjacent cells
///
/// Every cell is tried as a start; within one path no cell is used twice,
/// but a cell may start or appear in any number of distinct paths. A word
/// reachable by several paths is recorded once. `min_length` is an optional
/// post-filter (the presentation layer typically wants words of length 4
/// and up); it never changes what the traversal explores.
///
/// Dictionary entries are expected pre-lowercased and alphabetic-only
/// (see `wordlists::loader`); violating entries silently never match.
///
/// An empty grid or an empty dictionary yields an empty set, not an error.
///
/// # Examples
/// ```
/// use gridhunt::core::Grid;
/// use gridhunt::search::find_words;
///
/// let grid = Grid::build("meowpurryowlhiss").unwrap();
/// let found = find_words(&grid, &["meow", "purr", "owl", "hiss"], None);
/// assert_eq!(found.len(), 4);
/// ```
#[must_use]
pub fn find_words<S: AsRef<str>>(
    grid: &Grid,
    dictionary: &[S],
    min_length: Option<usize>,
) -> FxHashSet<String> {
    if grid.is_empty() || dictionary.is_empty() {
        return FxHashSet::default();
    }

    // Pre-pass: drop words using letters the board does not have
    let candidates = filter_dictionary(dictionary, LetterSet::from_grid(grid));
    let trie = Trie::from_words(&candidates);

    let Some(bounds) = grid.bounds() else {
        return FxHashSet::default();
    };

    let mut walker = Walker::new(grid, bounds);
    for start in sorted_starts(grid) {
        walker.walk(start, trie.root());
        debug_assert!(walker.visited.is_empty(), "visited set must drain");
    }

    apply_min_length(walker.into_found(), min_length)
}

/// Start cells in sorted order, for deterministic traversal
pub(super) fn sorted_starts(grid: &Grid) -> Vec<Coord> {
    let mut starts: Vec<Coord> = grid.coords().collect();
    starts.sort_unstable();
    starts
}

/// Apply the optional minimum-length post-filter
pub(super) fn apply_min_length(
    mut found: FxHashSet<String>,
    min_length: Option<usize>,
) -> FxHashSet<String> {
    if let Some(min) = min_length {
        found.retain(|word| word.len() >= min);
    }
    found
}

/// One backtracking traversal over a shared grid
///
/// Holds the path-local state: the visited set (strict stack discipline,
/// added on entry and removed on every exit), the accumulated prefix, and
/// the found-word accumulator.
pub(super) struct Walker<'a> {
    grid: &'a Grid,
    max_row: usize,
    max_col: usize,
    visited: FxHashSet<Coord>,
    prefix: String,
    found: FxHashSet<String>,
}

impl<'a> Walker<'a> {
    pub(super) fn new(grid: &'a Grid, (max_row, max_col): (usize, usize)) -> Self {
        Self {
            grid,
            max_row,
            max_col,
            visited: FxHashSet::default(),
            prefix: String::new(),
            found: FxHashSet::default(),
        }
    }

    /// Visit one cell with the trie node reached so far
    ///
    /// Prunes when the coordinate is not a cell, is already on the active
    /// path, or when no dictionary word continues with its letter.
    pub(super) fn walk(&mut self, (row, col): Coord, node: &TrieNode) {
        if self.visited.contains(&(row, col)) {
            return;
        }
        let Some(letter) = self.grid.get((row, col)) else {
            return;
        };
        let Some(next) = node.child(letter) else {
            return;
        };

        self.prefix.push(letter as char);
        self.visited.insert((row, col));

        // Prefix words along the path are all recorded ("cat" and "cats")
        if next.is_word() {
            self.found.insert(self.prefix.clone());
        }

        for &(d_row, d_col) in &DIRECTIONS {
            let n_row = row as isize + d_row;
            let n_col = col as isize + d_col;
            if n_row >= 0
                && n_col >= 0
                && n_row as usize <= self.max_row
                && n_col as usize <= self.max_col
            {
                self.walk((n_row as usize, n_col as usize), next);
            }
        }

        // Backtrack so sibling branches and other starts can reuse the cell
        self.visited.remove(&(row, col));
        self.prefix.pop();
    }

    pub(super) fn into_found(self) -> FxHashSet<String> {
        self.found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> FxHashSet<String> {
        words.iter().map(std::string::ToString::to_string).collect()
    }

    /// Check that `word` is traceable on `grid` as a path of distinct,
    /// pairwise-adjacent (8-directional) cells.
    fn has_path(grid: &Grid, word: &str) -> bool {
        fn step(grid: &Grid, rest: &[u8], at: Coord, visited: &mut Vec<Coord>) -> bool {
            let [next, remaining @ ..] = rest else {
                return true;
            };
            for &(d_row, d_col) in &DIRECTIONS {
                let n_row = at.0 as isize + d_row;
                let n_col = at.1 as isize + d_col;
                if n_row < 0 || n_col < 0 {
                    continue;
                }
                let neighbor = (n_row as usize, n_col as usize);
                if visited.contains(&neighbor) || grid.get(neighbor) != Some(*next) {
                    continue;
                }
                visited.push(neighbor);
                if step(grid, remaining, neighbor, visited) {
                    return true;
                }
                visited.pop();
            }
            false
        }

        let bytes = word.as_bytes();
        let Some((&first, rest)) = bytes.split_first() else {
            return false;
        };
        grid.coords().any(|start| {
            if grid.get(start) != Some(first) {
                return false;
            }
            let mut visited = vec![start];
            step(grid, rest, start, &mut visited)
        })
    }

    #[test]
    fn finds_words_on_the_sample_board() {
        let grid = Grid::build("meowpurryowlhiss").unwrap();
        let dictionary = ["meow", "owl", "purr", "hiss", "owly", "row"];

        let found = find_words(&grid, &dictionary, None);

        for expected in ["meow", "purr", "owl", "hiss", "row"] {
            assert!(found.contains(expected), "missing {expected}");
        }
        // 'y' at (2,0) is not adjacent to the 'l' of either "owl" path
        assert!(!found.contains("owly"));
    }

    #[test]
    fn never_finds_words_with_absent_letters() {
        let grid = Grid::build("meowpurryowlhiss").unwrap();
        let found = find_words(&grid, &["cat", "dog", "meow"], None);

        assert_eq!(found, set(&["meow"]));
    }

    #[test]
    fn empty_dictionary_yields_empty_set() {
        let grid = Grid::build("meowpurryowlhiss").unwrap();
        let dictionary: [&str; 0] = [];
        assert!(find_words(&grid, &dictionary, None).is_empty());
    }

    #[test]
    fn empty_grid_yields_empty_set() {
        let grid = Grid::build("").unwrap();
        assert!(find_words(&grid, &["meow", "owl"], None).is_empty());
    }

    #[test]
    fn single_cell_board_min_length_boundary() {
        let grid = Grid::build("a").unwrap();
        let dictionary = ["a", "ab"];

        assert_eq!(find_words(&grid, &dictionary, None), set(&["a"]));
        assert!(find_words(&grid, &dictionary, Some(2)).is_empty());
    }

    #[test]
    fn cell_cannot_be_reused_within_one_path() {
        // Only one 'a' on the board and no adjacent second 'a'
        let grid = Grid::build("a").unwrap();
        assert!(find_words(&grid, &["aa"], None).is_empty());

        // Two 'a's at opposite corners of a 3×3 are not adjacent either
        let grid = Grid::build("abbbbbbba").unwrap();
        assert!(find_words(&grid, &["aa"], None).is_empty());

        // Adjacent 'a's can
        let grid = Grid::build("aabb").unwrap();
        assert_eq!(find_words(&grid, &["aa"], None), set(&["aa"]));
    }

    #[test]
    fn prefix_words_along_one_path_all_recorded() {
        let grid = Grid::build("cast").unwrap();
        let found = find_words(&grid, &["cat", "cats"], None);

        assert_eq!(found, set(&["cat", "cats"]));
    }

    #[test]
    fn word_reachable_by_many_paths_recorded_once() {
        let grid = Grid::build("aaaa").unwrap();
        let found = find_words(&grid, &["aa"], None);
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn dictionary_subset_monotonicity() {
        let grid = Grid::build("meowpurryowlhiss").unwrap();
        let small = ["meow", "owl"];
        let large = ["meow", "owl", "purr", "hiss", "row", "sir"];

        let from_small = find_words(&grid, &small, None);
        let from_large = find_words(&grid, &large, None);

        assert!(from_small.is_subset(&from_large));
    }

    #[test]
    fn idempotent_for_identical_inputs() {
        let grid = Grid::build("meowpurryowlhiss").unwrap();
        let dictionary = ["meow", "owl", "purr", "hiss", "row"];

        let first = find_words(&grid, &dictionary, None);
        let second = find_words(&grid, &dictionary, None);
        assert_eq!(first, second);
    }

    #[test]
    fn prefilter_never_changes_the_result() {
        let grid = Grid::build("meowpurryowlhiss").unwrap();
        let dictionary = ["meow", "owl", "purr", "hiss", "cat", "zebra", "quiz"];

        let letters = LetterSet::from_grid(&grid);
        let filtered = filter_dictionary(&dictionary, letters);

        let full_run = find_words(&grid, &dictionary, None);
        let filtered_run = find_words(&grid, &filtered, None);
        assert_eq!(full_run, filtered_run);
    }

    #[test]
    fn every_found_word_has_a_valid_path() {
        let grid = Grid::build("meowpurryowlhiss").unwrap();
        let dictionary = ["meow", "owl", "purr", "hiss", "row", "sir", "his", "sip"];

        let found = find_words(&grid, &dictionary, None);
        assert!(!found.is_empty());
        for word in &found {
            assert!(has_path(&grid, word), "no valid path for {word}");
        }
    }

    #[test]
    fn min_length_is_a_pure_post_filter() {
        let grid = Grid::build("meowpurryowlhiss").unwrap();
        let dictionary = ["meow", "owl", "purr", "hiss", "row"];

        let unfiltered = find_words(&grid, &dictionary, None);
        let filtered = find_words(&grid, &dictionary, Some(4));

        for word in &filtered {
            assert!(word.len() >= 4);
            assert!(unfiltered.contains(word));
        }
        assert!(filtered.contains("meow"));
        assert!(!filtered.contains("owl"));
    }

    #[test]
    fn searches_sparse_grids_by_membership() {
        use rustc_hash::FxHashMap;

        // "owl" along a diagonal with holes elsewhere
        let mut cells = FxHashMap::default();
        cells.insert((0, 0), b'o');
        cells.insert((1, 1), b'w');
        cells.insert((2, 2), b'l');
        let grid = Grid::from_cells(cells);

        let found = find_words(&grid, &["owl", "low"], None);
        // "low" would need to start from the far corner; only "owl" traces
        assert_eq!(found, set(&["owl"]));
    }
}
