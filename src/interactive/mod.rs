//! Interactive TUI interface
//!
//! Full-screen word picker for a name-to-phrase session.

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, run_tui};
