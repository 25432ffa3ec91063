//! Error taxonomy for the anagram engine
//!
//! "No matches" is never an error: lookups and searches return empty results instead.

use std::io;

/// Errors raised by loading and querying a dictionary
#[derive(Debug, thiserror::Error)]
pub enum AnagramError {
    /// The dictionary source could not be opened or read
    #[error("dictionary source '{source_name}' is unavailable: {source}")]
    SourceUnavailable {
        source_name: String,
        #[source]
        source: io::Error,
    },

    /// A query string that cannot be normalized into a word
    #[error("invalid query '{query}': {reason}")]
    InvalidQuery { query: String, reason: &'static str },

    /// A selection policy picked a candidate that does not exist
    #[error("selection {index} is out of range for {available} candidates")]
    InvalidSelection { index: usize, available: usize },
}

impl AnagramError {
    pub(crate) fn source_unavailable(source_name: impl Into<String>, source: io::Error) -> Self {
        Self::SourceUnavailable {
            source_name: source_name.into(),
            source,
        }
    }

    pub(crate) fn invalid_query(query: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidQuery {
            query: query.into(),
            reason,
        }
    }
}

/// Result alias used throughout the library
pub type Result<T, E = AnagramError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn source_unavailable_keeps_io_cause() {
        let err = AnagramError::source_unavailable(
            "missing.txt",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );

        assert!(err.to_string().contains("missing.txt"));
        assert!(err.source().is_some());
    }

    #[test]
    fn invalid_query_display() {
        let err = AnagramError::invalid_query("two words", "query must be a single word");
        assert_eq!(
            err.to_string(),
            "invalid query 'two words': query must be a single word"
        );
    }

    #[test]
    fn invalid_selection_display() {
        let err = AnagramError::InvalidSelection {
            index: 7,
            available: 3,
        };
        assert_eq!(
            err.to_string(),
            "selection 7 is out of range for 3 candidates"
        );
    }
}
