//! Dictionary loading utilities
//!
//! The sanitation boundary for the core: entries are trimmed, lowercased,
//! and kept only if alphabetic, so the trie and prefilter never see
//! contract-violating words.

use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a one-word-per-line file
///
/// Entries are trimmed and lowercased; blank lines and entries containing
/// anything other than ASCII letters are dropped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use gridhunt::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(sanitize(content.lines()))
}

/// Convert an embedded string slice to a sanitized word vector
///
/// # Examples
/// ```
/// use gridhunt::wordlists::WORDS;
/// use gridhunt::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    sanitize(slice.iter().copied())
}

fn sanitize<'a, I: Iterator<Item = &'a str>>(lines: I) -> Vec<String> {
    lines
        .filter_map(|line| {
            let word = line.trim().to_lowercase();
            if !word.is_empty() && word.chars().all(|c| c.is_ascii_lowercase()) {
                Some(word)
            } else {
                None
            }
        })
        .collect()
}
