//! Name-to-phrase command
//!
//! Runs one greedy selection session over a name.

use crate::error::Result;
use crate::search::{Dictionary, Session, SessionResult, Strategy};

/// Configuration for one session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub name: String,
}

impl SessionConfig {
    /// Join name parts given as separate arguments
    #[must_use]
    pub fn from_parts(parts: &[String]) -> Self {
        Self {
            name: parts.join(" "),
        }
    }
}

/// Run a session for `config.name`, letting `strategy` pick every word
///
/// # Errors
///
/// Returns `InvalidSelection` if the strategy picks a candidate that does not exist.
pub fn run_session<S: Strategy + ?Sized>(
    dictionary: &Dictionary,
    config: &SessionConfig,
    strategy: &mut S,
) -> Result<SessionResult> {
    Session::new(dictionary, &config.name).run(strategy)
}
