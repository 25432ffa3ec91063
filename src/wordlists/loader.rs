//! Word list loading utilities
//!
//! Reads a newline-delimited word list from a file, a reader or an in-memory string.

use crate::core::{Word, WordList};
use crate::error::{AnagramError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// Number of entries shown at each end of a freshly loaded list
const PREVIEW_LEN: usize = 5;

/// Load words from any buffered line source
///
/// Every line is trimmed and lowercased. Empty lines are kept.
///
/// # Errors
///
/// Returns `SourceUnavailable` if reading fails part way through
/// (including invalid UTF-8). No partial list is returned.
pub fn load_from_reader<R: BufRead>(reader: R, source_name: &str) -> Result<WordList> {
    let words = reader
        .lines()
        .map(|line| line.map(|l| Word::new(&l)))
        .collect::<std::io::Result<WordList>>()
        .map_err(|e| AnagramError::source_unavailable(source_name, e))?;

    log_loaded(&words, source_name);
    Ok(words)
}

/// Load words from a file
///
/// # Errors
///
/// Returns `SourceUnavailable` if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use anagram_engine::wordlists::loader::load_from_file;
///
/// let words = load_from_file("dictionaries/2of4brif.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordList> {
    let path = path.as_ref();
    let source_name = path.display().to_string();

    let file =
        File::open(path).map_err(|e| AnagramError::source_unavailable(source_name.clone(), e))?;

    load_from_reader(BufReader::new(file), &source_name)
}

/// Load words from an in-memory string, one per line
#[must_use]
pub fn load_from_str(content: &str) -> WordList {
    WordList::from_lines(content.lines())
}

/// Convert an embedded string slice to a word list
///
/// # Examples
/// ```
/// use anagram_engine::wordlists::loader::words_from_slice;
/// use anagram_engine::wordlists::DEFAULT_WORDS;
///
/// let words = words_from_slice(DEFAULT_WORDS);
/// assert_eq!(words.len(), DEFAULT_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> WordList {
    WordList::from_lines(slice.iter().copied())
}

fn log_loaded(words: &WordList, source_name: &str) {
    info!(
        source = source_name,
        entries = words.len(),
        "dictionary loaded"
    );
    debug!(
        first = ?words.head(PREVIEW_LEN).iter().map(Word::text).collect::<Vec<_>>(),
        last = ?words.tail(PREVIEW_LEN).iter().map(Word::text).collect::<Vec<_>>(),
        "dictionary preview"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    fn texts(words: &WordList) -> Vec<&str> {
        words.iter().map(Word::text).collect()
    }

    #[test]
    fn load_from_str_normalizes_lines() {
        let words = load_from_str("Bear\r\n  BARE\narbe \n");
        assert_eq!(texts(&words), vec!["bear", "bare", "arbe"]);
    }

    #[test]
    fn load_keeps_blank_lines() {
        let words = load_from_str("a\n\nb\n");
        assert_eq!(texts(&words), vec!["a", "", "b"]);
    }

    #[test]
    fn load_from_reader_reads_cursor() {
        let words = load_from_reader(Cursor::new("zoo\nZoo\n"), "memory").unwrap();
        assert_eq!(texts(&words), vec!["zoo", "zoo"]);
    }

    #[test]
    fn load_from_reader_rejects_invalid_utf8() {
        let bytes: &[u8] = b"good\n\xff\xfe\n";
        let result = load_from_reader(Cursor::new(bytes), "broken");
        assert!(matches!(
            result,
            Err(AnagramError::SourceUnavailable { ref source_name, .. }) if source_name == "broken"
        ));
    }

    #[test]
    fn load_from_file_reads_words() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Polyglot").unwrap();
        writeln!(file, "bear").unwrap();

        let words = load_from_file(file.path()).unwrap();
        assert_eq!(texts(&words), vec!["polyglot", "bear"]);
    }

    #[test]
    fn load_from_missing_file_is_source_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");

        let err = load_from_file(&missing).unwrap_err();
        assert!(matches!(err, AnagramError::SourceUnavailable { .. }));
        assert!(err.to_string().contains("nope.txt"));
    }

    #[test]
    fn words_from_slice_converts_all() {
        let words = words_from_slice(&["Ann", "an", "a"]);
        assert_eq!(texts(&words), vec!["ann", "an", "a"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }
}
