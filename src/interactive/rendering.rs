//! TUI rendering with ratatui
//!
//! Layout for the anagram word picker.

use super::app::{App, InputMode, MessageStyle};
use crate::output::formatters::spaced_letters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, ListState, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45), // Candidates
            Constraint::Percentage(55), // Session info
        ])
        .split(chunks[1]);

    render_candidates(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    // Input area
    render_input(f, app, chunks[2]);

    // Status bar
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 ANAGRAM CREATOR - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(" Possible Words ({}) ", app.candidates.len());

    if app.candidates.is_empty() {
        let paragraph = Paragraph::new("No words can be formed")
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            );
        f.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = app
        .candidates
        .iter()
        .enumerate()
        .map(|(i, word)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{i:>4}) "), Style::default().fg(Color::DarkGray)),
                Span::raw(*word),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Green)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default().with_selected(Some(app.selected));
    f.render_stateful_widget(list, area, &mut state);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Name and pool
            Constraint::Length(3), // Letters used gauge
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_session(f, app, chunks[0]);
    render_letters_used(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_session(f: &mut Frame, app: &App, area: Rect) {
    let phrase = app.session.chosen().join(" ");

    let content = vec![
        Line::from(vec![
            Span::raw("Name:      "),
            Span::styled(
                app.session.input().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("Remaining: "),
            Span::styled(
                spaced_letters(&app.pool().remaining()),
                Style::default().fg(Color::Red),
            ),
        ]),
        Line::from(vec![
            Span::raw("Phrase:    "),
            Span::styled(
                phrase,
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Session ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_letters_used(f: &mut Frame, app: &App, area: Rect) {
    let remaining = app.pool().len();
    let used: usize = app.session.chosen().iter().map(|w| w.chars().count()).sum();
    let total = used + remaining;
    let percent = if total == 0 {
        100
    } else {
        (used * 100 / total) as u16
    };

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{used}/{total} letters used"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Finished => (
            " Session complete | 'u' to undo, 'n' for a new name, 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Choosing => (
            " Choose a word: ↑/↓ to move, Enter to take it, 'r' for random ",
            "",
            Color::Yellow,
        ),
        InputMode::NameEntry => (
            " Enter a new name | ESC to cancel ",
            app.name_buffer.as_str(),
            Color::Cyan,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let dictionary_text = format!("Dictionary: {} words", app.dictionary.len());
    let dictionary = Paragraph::new(dictionary_text).alignment(Alignment::Center);
    f.render_widget(dictionary, chunks[0]);

    let chosen_text = format!("Words chosen: {}", app.session.chosen().len());
    let chosen = Paragraph::new(chosen_text).alignment(Alignment::Center);
    f.render_widget(chosen, chunks[1]);

    let help = Paragraph::new("q: Quit | u: Undo | r: Random | n: New name")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
