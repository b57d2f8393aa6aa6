//! Puzzle board representation
//!
//! A Grid maps `(row, col)` coordinates to single lowercase letters. It is
//! built once from a flat board string and is immutable afterwards.

use rustc_hash::FxHashMap;
use std::fmt;

/// A `(row, col)` cell coordinate, both components ≥ 0.
pub type Coord = (usize, usize);

/// A letter grid: a coordinate → lowercase-letter mapping
///
/// The mapping is not required to be dense or rectangular; lookups during
/// search use per-cell membership tests rather than range arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: FxHashMap<Coord, u8>,
    width: usize,
}

/// Error type for invalid board strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The board string contains a character outside `a-z` (after lowercasing)
    InvalidCharacter(char),
    /// The derived row width is zero for a non-empty board string
    ZeroSide,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter(c) => {
                write!(f, "Board contains non-alphabetic character {c:?}")
            }
            Self::ZeroSide => write!(f, "Non-empty board string produced a zero-width grid"),
        }
    }
}

impl std::error::Error for GridError {}

impl Grid {
    /// Build a grid from a flat board string
    ///
    /// The input is lowercased and laid out row-major with row width
    /// `n = floor(sqrt(len))`, so a perfect-square input yields an n×n
    /// square. A non-perfect-square input ends on a partial final row; the
    /// remainder of that row simply does not exist. This mirrors the layout
    /// rule of the upstream puzzle and is a documented limitation rather
    /// than an inferred rectangular shape.
    ///
    /// An empty string yields an empty grid (searches on it return no
    /// results without error).
    ///
    /// # Errors
    /// Returns `GridError` if:
    /// - Any character is not an ASCII letter
    /// - A non-empty input derives a zero row width (defensive; cannot
    ///   happen for any nonempty string since `floor(sqrt(1)) == 1`)
    ///
    /// # Examples
    /// ```
    /// use gridhunt::core::Grid;
    ///
    /// let grid = Grid::build("MEOW").unwrap();
    /// assert_eq!(grid.get((0, 0)), Some(b'm'));
    /// assert_eq!(grid.get((1, 1)), Some(b'w'));
    ///
    /// assert!(Grid::build("ab3d").is_err());
    /// ```
    pub fn build(board: &str) -> Result<Self, GridError> {
        let board = board.to_lowercase();

        if board.is_empty() {
            return Ok(Self {
                cells: FxHashMap::default(),
                width: 0,
            });
        }

        if let Some(bad) = board.chars().find(|c| !c.is_ascii_lowercase()) {
            return Err(GridError::InvalidCharacter(bad));
        }

        let width = board.len().isqrt();
        if width == 0 {
            return Err(GridError::ZeroSide);
        }

        let mut cells = FxHashMap::default();
        for (idx, letter) in board.bytes().enumerate() {
            cells.insert((idx / width, idx % width), letter);
        }

        Ok(Self { cells, width })
    }

    /// Build a grid directly from a cell mapping
    ///
    /// Accepts sparse or ragged mappings; the search treats missing
    /// coordinates as out of bounds. Letters must already be lowercase.
    #[must_use]
    pub fn from_cells(cells: FxHashMap<Coord, u8>) -> Self {
        let width = cells.keys().map(|&(_, col)| col + 1).max().unwrap_or(0);
        Self { cells, width }
    }

    /// Get the letter at a coordinate, if the cell exists
    #[inline]
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<u8> {
        self.cells.get(&coord).copied()
    }

    /// Check whether a coordinate is a cell of the grid
    #[inline]
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains_key(&coord)
    }

    /// Number of cells
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Nominal row width derived at build time
    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Iterate over all cell coordinates (unordered)
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.keys().copied()
    }

    /// Iterate over all cell letters (unordered, duplicates included)
    pub fn letters(&self) -> impl Iterator<Item = u8> + '_ {
        self.cells.values().copied()
    }

    /// Maximum row and column present, scanning all keys
    ///
    /// Returns `None` for an empty grid. The minimum bound is implicitly
    /// zero; negative coordinates are unrepresentable.
    #[must_use]
    pub fn bounds(&self) -> Option<(usize, usize)> {
        let max_row = self.cells.keys().map(|&(row, _)| row).max()?;
        let max_col = self.cells.keys().map(|&(_, col)| col).max()?;
        Some((max_row, max_col))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((max_row, max_col)) = self.bounds() else {
            return Ok(());
        };

        for row in 0..=max_row {
            for col in 0..=max_col {
                if col > 0 {
                    write!(f, " ")?;
                }
                match self.get((row, col)) {
                    Some(letter) => write!(f, "{}", letter as char)?,
                    None => write!(f, "·")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
