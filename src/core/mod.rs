//! Core domain types for the grid solver
//!
//! This module contains the fundamental domain types with zero external
//! dependencies beyond hash collections. All types here are pure, testable,
//! and immutable once built.

mod grid;
mod trie;

pub use grid::{Coord, Grid, GridError};
pub use trie::{Trie, TrieNode};
