//! Dictionary summary command

use crate::core::Word;
use crate::search::Dictionary;

/// Number of entries shown from each end of the list
const PREVIEW_LEN: usize = 5;

/// Overview of a loaded dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionarySummary {
    pub source: String,
    pub entries: usize,
    pub empty_entries: usize,
    pub groups: usize,
    pub largest_group: usize,
    pub first: Vec<String>,
    pub last: Vec<String>,
}

/// Summarize `dictionary`, loaded from `source`
#[must_use]
pub fn summarize(dictionary: &Dictionary, source: &str) -> DictionarySummary {
    let words = dictionary.words();
    let to_strings =
        |slice: &[Word]| -> Vec<String> { slice.iter().map(ToString::to_string).collect() };

    DictionarySummary {
        source: source.to_string(),
        entries: words.len(),
        empty_entries: words.empty_count(),
        groups: dictionary.index().group_count(),
        largest_group: dictionary
            .ranking()
            .top(dictionary.index(), 1)
            .next()
            .map_or(0, |group| group.len()),
        first: to_strings(words.head(PREVIEW_LEN)),
        last: to_strings(words.tail(PREVIEW_LEN)),
    }
}
