//! Formatting utilities for terminal output

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar for an anagram group size relative to the largest group
#[must_use]
pub fn group_bar(size: usize, largest: usize, width: usize) -> String {
    create_progress_bar(size as f64, largest as f64, width)
}

/// Letters spaced out for reading, e.g. `t o n y`
#[must_use]
pub fn spaced_letters(letters: &str) -> String {
    letters
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Words laid out in fixed-width columns
#[must_use]
pub fn columns(words: &[String], per_row: usize, width: usize) -> Vec<String> {
    words
        .chunks(per_row.max(1))
        .map(|row| {
            row.iter()
                .map(|w| format!("{w:<width$}"))
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}
