//! Formatting utilities for terminal output

/// Lay words out in aligned columns
///
/// Words are padded to the longest entry and wrapped after `columns` per
/// row. Returns an empty string for an empty list.
#[must_use]
pub fn columnize(words: &[String], columns: usize) -> String {
    if words.is_empty() || columns == 0 {
        return String::new();
    }

    let width = words.iter().map(String::len).max().unwrap_or(0) + 2;

    words
        .chunks(columns)
        .map(|row| {
            row.iter()
                .map(|word| format!("{word:<width$}"))
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
