//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_anagram_reports, print_batch_statistics, print_contained, print_ranking,
    print_session_result, print_summary,
};
