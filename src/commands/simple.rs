//! Simple interactive CLI mode
//!
//! Console prompt that lets the user pick each word of a session.

use crate::search::{LetterPool, RandomStrategy, Strategy};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Most candidates shown per turn
pub const MAX_SHOWN: usize = 25;

/// Strategy that asks the user on every turn
///
/// Accepts a candidate number, `r` for a random pick among the shown
/// candidates, or `q` to stop. Reads from any line source so it can be driven
/// by tests.
pub struct PromptStrategy<R: BufRead, W: Write> {
    input: R,
    output: W,
    random: RandomStrategy,
    turn: usize,
}

impl PromptStrategy<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on the terminal
    #[must_use]
    pub fn stdio(random: RandomStrategy) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), random)
    }
}

impl<R: BufRead, W: Write> PromptStrategy<R, W> {
    pub const fn new(input: R, output: W, random: RandomStrategy) -> Self {
        Self {
            input,
            output,
            random,
            turn: 0,
        }
    }

    fn show(&mut self, candidates: &[&str], pool: &LetterPool) -> io::Result<()> {
        self.turn += 1;
        writeln!(self.output, "{}", "─".repeat(60).cyan())?;
        writeln!(
            self.output,
            "Turn {}: remaining letters {}",
            self.turn,
            pool.remaining().bright_yellow().bold()
        )?;
        writeln!(self.output, "{}", "─".repeat(60).cyan())?;

        writeln!(self.output, "Possible words include:")?;
        for (i, word) in candidates.iter().take(MAX_SHOWN).enumerate() {
            writeln!(self.output, "  {i:>2}) {word}")?;
        }
        if candidates.len() > MAX_SHOWN {
            writeln!(
                self.output,
                "  ... and {} more",
                candidates.len() - MAX_SHOWN
            )?;
        }
        Ok(())
    }

    fn read_choice(&mut self, candidates: &[&str], pool: &LetterPool) -> io::Result<Option<usize>> {
        let shown = candidates.len().min(MAX_SHOWN);

        loop {
            write!(self.output, "Please enter your choice (0-{}, r, q): ", shown - 1)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                // End of input stops the session
                return Ok(None);
            }

            match line.trim().to_lowercase().as_str() {
                "q" | "quit" | "exit" => return Ok(None),
                "r" | "random" => {
                    return Ok(self.random.select(&candidates[..shown], pool));
                }
                choice => match choice.parse::<usize>() {
                    Ok(index) if index < shown => return Ok(Some(index)),
                    _ => writeln!(self.output, "❌ Invalid choice!")?,
                },
            }
        }
    }
}

impl<R: BufRead, W: Write> Strategy for PromptStrategy<R, W> {
    fn select(&mut self, candidates: &[&str], pool: &LetterPool) -> Option<usize> {
        if candidates.is_empty() {
            return None;
        }
        let choice = self
            .show(candidates, pool)
            .and_then(|()| self.read_choice(candidates, pool));

        match choice {
            Ok(Some(index)) => {
                if let Err(e) =
                    writeln!(self.output, "You selected: {}\n", candidates[index].green())
                {
                    tracing::warn!(error = %e, "could not echo selection");
                }
                Some(index)
            }
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(error = %e, "prompt failed, stopping session");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordList;
    use crate::search::{Dictionary, Session, SessionEnd};
    use std::io::Cursor;

    fn prompt(script: &str) -> PromptStrategy<Cursor<Vec<u8>>, Vec<u8>> {
        PromptStrategy::new(
            Cursor::new(script.as_bytes().to_vec()),
            Vec::new(),
            RandomStrategy::seeded(1),
        )
    }

    #[test]
    fn picks_numbered_candidates() {
        let dict = Dictionary::new(WordList::from_lines(["an", "ann", "a"]));
        let mut strategy = prompt("1\n0\n");

        let result = Session::new(&dict, "anna").run(&mut strategy).unwrap();
        assert_eq!(result.chosen, vec!["ann", "a"]);
        assert_eq!(result.end, SessionEnd::Exhausted);
    }

    #[test]
    fn invalid_input_is_asked_again() {
        let dict = Dictionary::new(WordList::from_lines(["an", "ann", "a"]));
        let mut strategy = prompt("banana\n9\n1\nq\n");

        let result = Session::new(&dict, "anna").run(&mut strategy).unwrap();
        assert_eq!(result.chosen, vec!["ann"]);
        assert_eq!(result.end, SessionEnd::Stopped);

        let shown = String::from_utf8(strategy.output).unwrap();
        assert_eq!(shown.matches("Invalid choice").count(), 2);
    }

    #[test]
    fn end_of_input_stops() {
        let dict = Dictionary::new(WordList::from_lines(["an"]));
        let mut strategy = prompt("");

        let result = Session::new(&dict, "anna").run(&mut strategy).unwrap();
        assert!(result.chosen.is_empty());
        assert_eq!(result.leftover, "anna");
        assert_eq!(result.end, SessionEnd::Stopped);
    }

    #[test]
    fn random_pick_is_a_valid_candidate() {
        let dict = Dictionary::new(WordList::from_lines(["an", "na", "a", "n"]));
        let mut strategy = prompt("r\nq\n");

        let result = Session::new(&dict, "anna").run(&mut strategy).unwrap();
        assert_eq!(result.chosen.len(), 1);
        assert!(["an", "na", "a", "n"].contains(&result.chosen[0].as_str()));
    }

    /// Writer that fails once the selection is echoed
    struct FailingEcho(Vec<u8>);

    impl Write for FailingEcho {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if String::from_utf8_lossy(buf).contains("You selected") {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
            }
            self.0.write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn failed_echo_keeps_the_choice() {
        let dict = Dictionary::new(WordList::from_lines(["an", "ann", "a"]));
        let mut strategy = PromptStrategy::new(
            Cursor::new(b"1\nq\n".to_vec()),
            FailingEcho(Vec::new()),
            RandomStrategy::seeded(1),
        );

        let result = Session::new(&dict, "anna").run(&mut strategy).unwrap();
        assert_eq!(result.chosen, vec!["ann"]);
        assert_eq!(result.end, SessionEnd::Stopped);
    }

    #[test]
    fn long_candidate_lists_are_capped() {
        let words: Vec<String> = (0..30).map(|_| "a".to_string()).collect();
        let dict = Dictionary::new(WordList::from_lines(&words));
        let mut strategy = prompt("q\n");

        let _ = Session::new(&dict, "aa").run(&mut strategy).unwrap();
        let shown = String::from_utf8(strategy.output).unwrap();
        assert!(shown.contains("... and 5 more"));
    }
}
