//! Exact anagram lookup command

use crate::error::Result;
use crate::search::Dictionary;

/// Anagrams found for one query word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnagramReport {
    pub query: String,
    pub matches: Vec<String>,
}

/// Look up the anagrams of every query word
///
/// # Errors
///
/// Returns `InvalidQuery` for the first malformed query; no reports are returned then.
pub fn find_anagram_reports(
    dictionary: &Dictionary,
    queries: &[String],
) -> Result<Vec<AnagramReport>> {
    queries
        .iter()
        .map(|query| {
            let matches = dictionary.find_anagrams(query)?;
            Ok(AnagramReport {
                query: query.clone(),
                matches: matches.into_iter().map(str::to_string).collect(),
            })
        })
        .collect()
}
