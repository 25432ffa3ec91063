//! Anagram Engine - CLI
//!
//! Anagram lookup, frequency ranking, and name-to-phrase sessions from the command line.

use anagram_engine::{
    commands::{
        PromptStrategy, SessionConfig, find_anagram_reports, find_contained_words, rank_groups,
        run_batch, run_session, summarize,
    },
    core::WordList,
    output::{
        print_anagram_reports, print_batch_statistics, print_contained, print_ranking,
        print_session_result, print_summary,
    },
    search::{Dictionary, RandomStrategy, StrategyType},
    wordlists::{
        DEFAULT_WORDS,
        loader::{load_from_file, words_from_slice},
    },
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "anagram_engine",
    about = "Find anagrams and turn names into phrases of dictionary words",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy for automatic sessions: random (default), first, longest
    #[arg(
        short,
        long,
        global = true,
        default_value = "random",
        value_parser = StrategyType::NAMES
    )]
    strategy: String,

    /// Wordlist: 'default' (bundled) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "default")]
    wordlist: String,

    /// Seed for the random strategy (reproducible sessions)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Drop empty lines from the word list
    #[arg(long, global = true)]
    skip_empty: bool,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Dictionary summary (default)
    Info,

    /// Exact anagrams of each word
    Anagrams {
        /// Words to look up
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Largest anagram groups
    Frequent {
        /// Number of groups to show
        #[arg(short = 'n', long, default_value = "5")]
        count: usize,
    },

    /// Words that can be spelled from the given letters
    Contained {
        /// Letters to draw from
        letters: String,

        /// Show at most this many words
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Turn a name into a phrase of dictionary words
    Name {
        /// The name (several arguments are joined with spaces)
        #[arg(required = true)]
        name: Vec<String>,

        /// Pick each word yourself at a prompt
        #[arg(short, long)]
        interactive: bool,
    },

    /// Run automatic sessions for many names
    Batch {
        /// Names to process
        names: Vec<String>,

        /// Read additional names from a file, one per line
        #[arg(short, long)]
        file: Option<String>,
    },

    /// Interactive TUI session
    Play {
        /// The name (several arguments are joined with spaces)
        #[arg(required = true)]
        name: Vec<String>,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Load the word list selected with the -w flag
///
/// - "default": the bundled dictionary
/// - "<path>": load a custom word list from file
fn load_wordlist(wordlist_mode: &str, skip_empty: bool) -> Result<WordList> {
    let words = match wordlist_mode {
        "default" => words_from_slice(DEFAULT_WORDS),
        path => load_from_file(path).with_context(|| format!("loading word list '{path}'"))?,
    };

    if skip_empty {
        debug!(empty = words.empty_count(), "dropping empty entries");
        Ok(words.without_empty())
    } else {
        Ok(words)
    }
}

fn read_names(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading names from '{}'", path.display()))?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

fn random_strategy(seed: Option<u64>) -> RandomStrategy {
    seed.map_or_else(RandomStrategy::new, RandomStrategy::seeded)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let words = load_wordlist(&cli.wordlist, cli.skip_empty)?;
    let dictionary = Dictionary::new(words);

    // Default to Info if no command given
    let command = cli.command.unwrap_or(Commands::Info);

    match command {
        Commands::Info => {
            print_summary(&summarize(&dictionary, &cli.wordlist));
            Ok(())
        }
        Commands::Anagrams { words } => {
            let reports = find_anagram_reports(&dictionary, &words)?;
            print_anagram_reports(&reports);
            Ok(())
        }
        Commands::Frequent { count } => {
            print_ranking(&rank_groups(&dictionary, count));
            Ok(())
        }
        Commands::Contained { letters, limit } => {
            print_contained(&find_contained_words(&dictionary, &letters, limit));
            Ok(())
        }
        Commands::Name { name, interactive } => {
            run_name_command(&dictionary, &name, interactive, &cli.strategy, cli.seed)
        }
        Commands::Batch { mut names, file } => {
            if let Some(path) = file {
                names.extend(read_names(Path::new(&path))?);
            }
            anyhow::ensure!(!names.is_empty(), "no names given (pass names or --file)");

            let stats = run_batch(&dictionary, &names, &cli.strategy, cli.seed, true)?;
            print_batch_statistics(&stats);
            Ok(())
        }
        Commands::Play { name } => run_play_command(&dictionary, &name, cli.seed),
    }
}

fn run_name_command(
    dictionary: &Dictionary,
    name: &[String],
    interactive: bool,
    strategy_name: &str,
    seed: Option<u64>,
) -> Result<()> {
    let config = SessionConfig::from_parts(name);

    let result = if interactive {
        let mut prompt = PromptStrategy::stdio(random_strategy(seed));
        run_session(dictionary, &config, &mut prompt)?
    } else {
        let mut strategy = StrategyType::from_name(strategy_name, seed);
        run_session(dictionary, &config, &mut strategy)?
    };

    print_session_result(&result);
    Ok(())
}

fn run_play_command(dictionary: &Dictionary, name: &[String], seed: Option<u64>) -> Result<()> {
    use anagram_engine::interactive::{App, run_tui};

    let config = SessionConfig::from_parts(name);
    let app = App::new(dictionary, &config.name, random_strategy(seed));
    let result = run_tui(app)?;

    print_session_result(&result);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn known_strategies_are_accepted() {
        for name in StrategyType::NAMES {
            let cli = Cli::try_parse_from(["anagram_engine", "-s", name, "info"]).unwrap();
            assert_eq!(cli.strategy, name);
        }
    }

    #[test]
    fn mistyped_strategy_is_rejected() {
        assert!(Cli::try_parse_from(["anagram_engine", "-s", "fisrt", "info"]).is_err());
    }

    #[test]
    fn strategy_defaults_to_random() {
        let cli = Cli::try_parse_from(["anagram_engine", "name", "anna"]).unwrap();
        assert_eq!(cli.strategy, "random");
    }
}
