//! Contained-words command

use crate::core::LetterFrequency;
use crate::search::Dictionary;

/// Words that can be spelled from a set of letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainedReport {
    pub letters: String,
    pub total: usize,
    pub words: Vec<String>,
}

/// Find dictionary words spelled from the letters of `text`
///
/// Only alphabetic characters of `text` count. Empty dictionary entries are
/// skipped. At most `limit` words are kept; `total` is the full count.
#[must_use]
pub fn find_contained_words(
    dictionary: &Dictionary,
    text: &str,
    limit: Option<usize>,
) -> ContainedReport {
    let query = LetterFrequency::of_letters(text);
    let found: Vec<&str> = dictionary
        .find_contained(&query)
        .into_iter()
        .filter(|word| !word.is_empty())
        .collect();

    ContainedReport {
        letters: text.to_string(),
        total: found.len(),
        words: found
            .into_iter()
            .take(limit.unwrap_or(usize::MAX))
            .map(str::to_string)
            .collect(),
    }
}
