//! TUI application state and logic

use crate::search::{
    Dictionary, LetterPool, RandomStrategy, Session, SessionEnd, SessionResult, Strategy,
};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub dictionary: &'a Dictionary,
    pub session: Session<'a>,
    pub candidates: Vec<&'a str>,
    pub selected: usize,
    pub input_mode: InputMode,
    pub name_buffer: String,
    pub messages: Vec<Message>,
    pub random: RandomStrategy,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Choosing,
    NameEntry,
    Finished,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, name: &str, random: RandomStrategy) -> Self {
        let mut app = Self {
            dictionary,
            session: Session::new(dictionary, name),
            candidates: Vec::new(),
            selected: 0,
            input_mode: InputMode::Choosing,
            name_buffer: String::new(),
            messages: vec![Message {
                text: "Welcome to the anagram creator! Pick words hidden in your name.".to_string(),
                style: MessageStyle::Info,
            }],
            random,
            should_quit: false,
        };
        app.refresh_candidates();
        app
    }

    /// Recompute candidates after the pool changed
    pub fn refresh_candidates(&mut self) {
        self.candidates = self.session.candidates();
        self.selected = self.selected.min(self.candidates.len().saturating_sub(1));

        let nothing_chosen = self.session.chosen().is_empty();

        if self.session.pool().is_empty() {
            self.input_mode = InputMode::Finished;
            if nothing_chosen {
                self.add_message("No letters to work with.", MessageStyle::Error);
            } else {
                self.add_message("🎉 Every letter used!", MessageStyle::Success);
            }
        } else if self.candidates.is_empty() {
            self.input_mode = InputMode::Finished;
            let text = if nothing_chosen {
                format!("No words can be formed from '{}'.", self.session.pool())
            } else {
                format!(
                    "No more words can be formed from '{}'. Press 'u' to undo.",
                    self.session.pool()
                )
            };
            self.add_message(&text, MessageStyle::Error);
        } else {
            self.input_mode = InputMode::Choosing;
        }
    }

    /// Move the highlighted candidate by `delta`, clamped to the list
    pub fn move_selection(&mut self, delta: isize) {
        if self.candidates.is_empty() {
            return;
        }
        let last = self.candidates.len() - 1;
        self.selected = self.selected.saturating_add_signed(delta).min(last);
    }

    pub fn choose_selected(&mut self) {
        if let Some(&word) = self.candidates.get(self.selected) {
            self.choose(word);
        }
    }

    pub fn choose_random(&mut self) {
        if let Some(index) = self.random.select(&self.candidates, self.session.pool()) {
            self.selected = index;
            self.choose_selected();
        }
    }

    fn choose(&mut self, word: &'a str) {
        match self.session.choose(word) {
            Ok(()) => {
                self.add_message(&format!("You selected: {word}"), MessageStyle::Success);
                self.selected = 0;
                self.refresh_candidates();
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn undo_last(&mut self) {
        if let Some(word) = self.session.undo() {
            self.add_message(&format!("Undone: {word}"), MessageStyle::Info);
            self.refresh_candidates();
        } else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
        }
    }

    /// Start over with a different name
    ///
    /// A name without letters is ignored and the current session continues.
    pub fn start_new(&mut self, name: &str) {
        if LetterPool::from_input(name).is_empty() {
            self.add_message("Name has no letters, keeping the current one", MessageStyle::Error);
            self.refresh_candidates();
            return;
        }
        self.session = Session::new(self.dictionary, name);
        self.selected = 0;
        self.messages.clear();
        self.add_message(&format!("New name: {name}"), MessageStyle::Info);
        self.refresh_candidates();
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    #[must_use]
    pub fn pool(&self) -> &LetterPool {
        self.session.pool()
    }

    /// Snapshot of the session as it stands
    #[must_use]
    pub fn result(&self) -> SessionResult {
        let end = if self.session.pool().is_empty() {
            SessionEnd::Exhausted
        } else if self.candidates.is_empty() {
            SessionEnd::NoCandidates
        } else {
            SessionEnd::Stopped
        };
        self.session.clone().finish(end)
    }
}

/// Run the TUI application
///
/// Returns the session as it stood when the user quit.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<SessionResult> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<SessionResult> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            }

            match app.input_mode {
                InputMode::Choosing | InputMode::Finished => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                    KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
                    KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
                    KeyCode::PageUp => app.move_selection(-10),
                    KeyCode::PageDown => app.move_selection(10),
                    KeyCode::Enter => app.choose_selected(),
                    KeyCode::Char('r') => app.choose_random(),
                    KeyCode::Char('u') => app.undo_last(),
                    KeyCode::Char('n') => {
                        app.input_mode = InputMode::NameEntry;
                        app.name_buffer.clear();
                        app.add_message("Type a new name, Enter to start", MessageStyle::Info);
                    }
                    _ => {}
                },
                InputMode::NameEntry => match key.code {
                    KeyCode::Esc => {
                        app.name_buffer.clear();
                        app.add_message("Cancelled name entry", MessageStyle::Info);
                        app.refresh_candidates();
                    }
                    KeyCode::Char(c) => app.name_buffer.push(c),
                    KeyCode::Backspace => {
                        app.name_buffer.pop();
                    }
                    KeyCode::Enter => {
                        let name = std::mem::take(&mut app.name_buffer);
                        app.start_new(&name);
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.result())
}
