//! Grid Hunt
//!
//! A Boggle-style word grid solver: finds every dictionary word that can be
//! traced as a contiguous path of 8-directionally adjacent cells on a letter
//! grid, using a trie-pruned backtracking search.
//!
//! # Quick Start
//!
//! ```rust
//! use gridhunt::core::Grid;
//! use gridhunt::search::find_words;
//!
//! let grid = Grid::build("meowpurryowlhiss").unwrap();
//! let dictionary = ["meow", "purr", "owl", "hiss", "cat"];
//!
//! let found = find_words(&grid, &dictionary, None);
//! assert!(found.contains("meow"));
//! assert!(!found.contains("cat"));
//! ```

// Core domain types
pub mod core;

// Grid search algorithms
pub mod search;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
