//! Batch sessions - many names at once
//!
//! Runs an automatic session for every name in parallel and aggregates statistics.

use crate::error::Result;
use crate::search::{Dictionary, Session, SessionEnd, SessionResult, StrategyType};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Aggregate statistics over a batch of sessions
#[derive(Debug)]
pub struct BatchStatistics {
    pub results: Vec<SessionResult>,
    pub total_names: usize,
    pub fully_used: usize,
    pub average_words: f64,
    pub average_leftover: f64,
    pub word_usage: HashMap<String, usize>,
    pub total_time: Duration,
}

impl BatchStatistics {
    /// The `n` most chosen words, most frequent first, ties alphabetical
    #[must_use]
    pub fn top_words(&self, n: usize) -> Vec<(&str, usize)> {
        let mut usage: Vec<(&str, usize)> = self
            .word_usage
            .iter()
            .map(|(word, &count)| (word.as_str(), count))
            .collect();
        usage.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        usage.truncate(n);
        usage
    }
}

/// Run one session per name with the named strategy
///
/// With `seed`, the name at position `i` uses seed `seed + i`, so a batch is
/// reproducible regardless of thread scheduling. Results keep the order of `names`.
///
/// # Errors
///
/// Returns the first session error (a strategy selecting out of range).
pub fn run_batch(
    dictionary: &Dictionary,
    names: &[String],
    strategy_name: &str,
    seed: Option<u64>,
    show_progress: bool,
) -> Result<BatchStatistics> {
    let pb = if show_progress {
        let pb = ProgressBar::new(names.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let results = names
        .par_iter()
        .enumerate()
        .map(|(i, name)| {
            let mut strategy =
                StrategyType::from_name(strategy_name, seed.map(|s| s.wrapping_add(i as u64)));
            let result = Session::new(dictionary, name).run(&mut strategy);
            pb.inc(1);
            result
        })
        .collect::<Result<Vec<_>>>()?;

    pb.finish_with_message("done");

    let stats = summarize_results(results, start.elapsed());
    info!(
        names = stats.total_names,
        fully_used = stats.fully_used,
        elapsed_ms = stats.total_time.as_millis() as u64,
        "batch finished"
    );
    Ok(stats)
}

fn summarize_results(results: Vec<SessionResult>, total_time: Duration) -> BatchStatistics {
    let total_names = results.len();
    let mut word_usage: HashMap<String, usize> = HashMap::new();
    let mut total_words = 0;
    let mut total_leftover = 0;
    let mut fully_used = 0;

    for result in &results {
        total_words += result.chosen.len();
        total_leftover += result.leftover.chars().count();
        if result.end == SessionEnd::Exhausted && !result.chosen.is_empty() {
            fully_used += 1;
        }
        for word in &result.chosen {
            *word_usage.entry(word.clone()).or_insert(0) += 1;
        }
    }

    let average = |total: usize| {
        if total_names == 0 {
            0.0
        } else {
            total as f64 / total_names as f64
        }
    };

    BatchStatistics {
        total_names,
        fully_used,
        average_words: average(total_words),
        average_leftover: average(total_leftover),
        word_usage,
        total_time,
        results,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordList;

    fn dictionary() -> Dictionary {
        Dictionary::new(WordList::from_lines([
            "a", "an", "and", "on", "toy", "held", "the", "end", "tony", "ann", "ryan", "meek",
        ]))
    }

    fn names() -> Vec<String> {
        ["tony held", "anna", "ryan adamson meek", "x", "qqq"]
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn results_keep_name_order() {
        let stats = run_batch(&dictionary(), &names(), "longest", None, false).unwrap();

        assert_eq!(stats.total_names, 5);
        let inputs: Vec<&str> = stats.results.iter().map(|r| r.input.as_str()).collect();
        assert_eq!(inputs, vec!["tony held", "anna", "ryan adamson meek", "x", "qqq"]);
    }

    #[test]
    fn deterministic_strategy_statistics() {
        let stats = run_batch(&dictionary(), &names(), "longest", None, false).unwrap();

        assert_eq!(stats.results[0].chosen, vec!["held", "tony"]);
        assert_eq!(stats.results[1].chosen, vec!["ann", "a"]);
        assert!(stats.results[3].chosen.is_empty());
        assert_eq!(stats.results[4].leftover, "qqq");
        assert_eq!(stats.fully_used, 2);
    }

    #[test]
    fn seeded_random_batch_is_reproducible() {
        let first = run_batch(&dictionary(), &names(), "random", Some(11), false).unwrap();
        let second = run_batch(&dictionary(), &names(), "random", Some(11), false).unwrap();
        assert_eq!(first.results, second.results);
    }

    #[test]
    fn top_words_sorted_by_usage() {
        let batch: Vec<String> = vec!["anna".into(), "anna".into(), "tony held".into()];
        let stats = run_batch(&dictionary(), &batch, "longest", None, false).unwrap();

        let top = stats.top_words(2);
        assert_eq!(top[0], ("a", 2));
        assert_eq!(top[1], ("ann", 2));
    }

    #[test]
    fn empty_batch() {
        let stats = run_batch(&dictionary(), &[], "first", None, false).unwrap();
        assert_eq!(stats.total_names, 0);
        assert!(stats.average_words.abs() < f64::EPSILON);
    }
}
