//! Display functions for command results

use super::formatters::{columns, group_bar, spaced_letters};
use crate::commands::{
    AnagramReport, BatchStatistics, ContainedReport, DictionarySummary, RankingReport,
};
use crate::search::{SessionEnd, SessionResult};
use colored::Colorize;

/// Print the dictionary summary
pub fn print_summary(summary: &DictionarySummary) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "DICTIONARY:".bright_cyan().bold(),
        summary.source.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📚 Dictionary with {} entries loaded.", summary.entries);
    if summary.empty_entries > 0 {
        println!("   Blank entries:   {}", summary.empty_entries);
    }
    println!("   Anagram groups:  {}", summary.groups);
    println!("   Largest group:   {}", summary.largest_group);
    println!("\nThe first and last 5 entries are:");
    println!("   {:?}", summary.first);
    println!("   {:?}", summary.last);
}

/// Print exact anagram lookups
pub fn print_anagram_reports(reports: &[AnagramReport]) {
    for report in reports {
        println!(
            "\nAnagrams for the word: {}",
            report.query.bright_yellow().bold()
        );
        if report.matches.is_empty() {
            println!("\t{}", "Word not found in dictionary.".bright_black());
        } else {
            for (i, word) in report.matches.iter().enumerate() {
                println!("\t{}) {}", i + 1, word.green());
            }
        }
    }
}

/// Print the most frequent anagram groups
pub fn print_ranking(report: &RankingReport) {
    println!(
        "\nThe {} most frequently occurring anagrams in the word list are:",
        report.requested.to_string().bright_cyan().bold()
    );

    let largest = report.largest();
    for group in &report.groups {
        let size = group.words.len();
        println!(
            "\n{} {} anagrams were found for these words:",
            group_bar(size, largest, 20).green(),
            size.to_string().bright_yellow().bold()
        );
        for word in &group.words {
            println!("\t{word}");
        }
    }
    println!(
        "\n({} distinct signatures in total)",
        report.total_groups.to_string().bright_black()
    );
}

/// Print words contained in a set of letters
pub fn print_contained(report: &ContainedReport) {
    println!(
        "\nWords that can be found in {}:",
        report.letters.bright_yellow().bold()
    );
    if report.words.is_empty() {
        println!("\t{}", "No dictionary word fits these letters.".bright_black());
        return;
    }
    for row in columns(&report.words, 6, 12) {
        println!("\t{row}");
    }
    if report.total > report.words.len() {
        println!(
            "\t{}",
            format!("... {} of {} shown", report.words.len(), report.total).bright_black()
        );
    }
}

/// Print the result of one selection session
pub fn print_session_result(result: &SessionResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Your name is: {}", result.input.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    if result.chosen.is_empty() {
        println!("\nNo phrase could be formed.");
    } else {
        println!(
            "\nPhrase contained within your name: {}",
            result.phrase().green().bold()
        );
    }

    if !result.leftover.is_empty() {
        println!(
            "\nNote: the following letters remained that we could not form words from:\n\t{}",
            spaced_letters(&result.leftover).red()
        );
    }

    let status = match result.end {
        SessionEnd::Exhausted => "✅ Every letter used".green(),
        SessionEnd::NoCandidates => "⚠️  Letters left with no possible words".yellow(),
        SessionEnd::Stopped => "⏹  Stopped".bright_black(),
    };
    println!("\n{status}");
}

/// Print aggregate statistics of a batch run
pub fn print_batch_statistics(stats: &BatchStatistics) {
    println!("\n{}", "═".repeat(70).cyan());
    println!(" {} ", "BATCH RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(70).cyan());

    for result in &stats.results {
        let phrase = if result.chosen.is_empty() {
            "-".bright_black()
        } else {
            result.phrase().green()
        };
        let leftover = if result.leftover.is_empty() {
            String::new()
        } else {
            format!("  [{}]", result.leftover)
        };
        println!("  {:<28} → {phrase}{}", result.input, leftover.red());
    }

    println!("\n📊 {}", "Statistics:".bright_cyan().bold());
    println!("   Names:            {}", stats.total_names);
    println!(
        "   Fully used:       {}",
        stats.fully_used.to_string().green()
    );
    println!("   Avg words/name:   {:.2}", stats.average_words);
    println!("   Avg leftover:     {:.2} letters", stats.average_leftover);
    println!("   Time taken:       {:.2}s", stats.total_time.as_secs_f64());

    let top = stats.top_words(5);
    if !top.is_empty() {
        println!("\n📈 {}", "Most chosen words:".bright_cyan().bold());
        for (word, count) in top {
            println!("   {word:<12} {count}");
        }
    }
}
