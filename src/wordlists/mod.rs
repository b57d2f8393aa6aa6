//! Dictionaries for grid solving
//!
//! Provides an embedded default word list compiled into the binary plus a
//! loader for user-supplied one-word-per-line files. Both enforce the core's
//! input contract: trimmed, lowercase, alphabetic-only entries.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
