//! TUI rendering with ratatui
//!
//! Panels for the word puzzle: progress, counters, letter keyboard and the
//! end-of-round dialog.

use super::app::{App, MessageStyle};
use crate::engine::rules::{ALPHABET, MAX_LIVES};
use crate::engine::{Dialog, DialogAction, GameStatus, Phase, SoundPlayer};
use crate::output::formatters::{KeyState, key_state, round_summary};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<S: SoundPlayer>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    if let Some(status) = app.status() {
        render_words(f, status, main_chunks[0]);
        render_info_panel(f, app, status, main_chunks[1]);
        render_keyboard(f, status, chunks[2]);
        render_status(f, status, chunks[3]);
    }

    if let Some(dialog) = app.dialog() {
        render_dialog(f, dialog);
    } else if app.show_help {
        render_help(f);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎮 WOORDPUZZEL - Raad de Nederlandse woorden")
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

fn render_words(f: &mut Frame, status: &GameStatus, area: Rect) {
    let mut lines = vec![Line::from("")];

    for (i, progress) in status.word_progress.iter().enumerate() {
        let complete = !progress.contains('_');
        let style = if complete {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        };

        lines.push(Line::from(vec![
            Span::styled(format!("  {}. ", i + 1), Style::default().fg(Color::DarkGray)),
            Span::styled(progress.clone(), style),
        ]));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        format!("  {}", round_summary(status)),
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Woorden ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_info_panel<S: SoundPlayer>(f: &mut Frame, app: &App<S>, status: &GameStatus, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Counters
            Constraint::Length(3), // Progress gauge
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_counters(f, status, chunks[0]);
    render_progress(f, status, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_counters(f: &mut Frame, status: &GameStatus, area: Rect) {
    let lives_color = if status.lives <= 1 {
        Color::Red
    } else if status.lives < MAX_LIVES {
        Color::Yellow
    } else {
        Color::Green
    };

    let mut content = vec![
        Line::from(vec![
            Span::raw("Levens: "),
            Span::styled(status.lives_bar(), Style::default().fg(lives_color)),
        ]),
        Line::from(vec![
            Span::raw("Score:  "),
            Span::styled(
                status.score.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("Streak: {}", status.streak)),
        Line::from(format!("Hints:  {}", status.hints_used)),
    ];

    if status.hint_available() {
        content.push(Line::from(Span::styled(
            "💡 Spatie voor een hint",
            Style::default().fg(Color::Cyan),
        )));
    }

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Status ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(paragraph, area);
}

fn render_progress(f: &mut Frame, status: &GameStatus, area: Rect) {
    let total: usize = status.words.iter().map(|w| w.chars().count()).sum();
    let revealed: usize = status.revealed_positions.iter().map(Vec::len).sum();
    let ratio = if total == 0 {
        1.0
    } else {
        revealed as f64 / total as f64
    };

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{revealed}/{total} letters"));

    f.render_widget(gauge, area);
}

fn render_messages<S: SoundPlayer>(f: &mut Frame, app: &App<S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages()
        .iter()
        .rev()
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
        List::new(messages).block(Block::default().title(" Berichten ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_keyboard(f: &mut Frame, status: &GameStatus, area: Rect) {
    let (first, second) = ALPHABET.split_at(13);

    let keyboard = Paragraph::new(vec![keyboard_row(status, first), keyboard_row(status, second)])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Toetsenbord ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double),
        );

    f.render_widget(keyboard, area);
}

fn keyboard_row(status: &GameStatus, letters: &[char]) -> Line<'static> {
    let spans: Vec<Span<'static>> = letters
        .iter()
        .flat_map(|&letter| {
            let style = match key_state(status, letter) {
                KeyState::Unused => Style::default().fg(Color::White),
                KeyState::Partial => Style::default().fg(Color::Green),
                KeyState::Done => Style::default().fg(Color::DarkGray),
                KeyState::Wrong => Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::CROSSED_OUT),
            };
            [Span::styled(letter.to_string(), style), Span::raw(" ")]
        })
        .collect();
    Line::from(spans)
}

fn render_status(f: &mut Frame, status: &GameStatus, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let phase_color = match status.phase {
        Phase::Playing => Color::White,
        Phase::Won => Color::Green,
        Phase::Lost => Color::Red,
    };
    let phase = Paragraph::new(format!("Fase: {}", status.phase))
        .alignment(Alignment::Center)
        .style(Style::default().fg(phase_color));
    f.render_widget(phase, chunks[0]);

    let sound_text = if status.sound_enabled {
        "🔊 Geluid aan"
    } else {
        "🔇 Geluid uit"
    };
    let sound = Paragraph::new(sound_text).alignment(Alignment::Center);
    f.render_widget(sound, chunks[1]);

    let help_text = if status.phase.is_over() {
        "Enter: Nieuw spel | F1: Hulp | Ctrl+C: Stoppen"
    } else {
        "A-Z: Raden | Ctrl+N: Nieuw | Ctrl+S: Geluid | F1: Hulp | Ctrl+C: Stoppen"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

fn render_dialog(f: &mut Frame, dialog: &Dialog) {
    let area = centered(f.area(), 60, 9);
    let color = match dialog.action {
        DialogAction::NextWord => Color::Green,
        DialogAction::NewGame => Color::Red,
    };

    let content = vec![
        Line::from(""),
        Line::from(dialog.body.clone()),
        Line::from(""),
        Line::from(Span::styled(
            format!("[ Enter: {} ]  [ Esc: Sluiten ]", dialog.button),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ];

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {} ", dialog.title))
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

fn render_help(f: &mut Frame) {
    let area = centered(f.area(), 60, 14);

    let content = vec![
        Line::from("Raad de Nederlandse woorden letter voor letter."),
        Line::from("Elke keer onthult één letter één positie."),
        Line::from(""),
        Line::from("A-Z       Raad een letter"),
        Line::from("Spatie    Hint (alleen met minder dan 2 levens)"),
        Line::from("Enter     Bevestigen / nieuw spel"),
        Line::from("Esc       Venster sluiten"),
        Line::from("Ctrl+N    Nieuw spel"),
        Line::from("Ctrl+S    Geluid aan/uit"),
        Line::from("F1        Deze hulp"),
        Line::from("Ctrl+C    Stoppen"),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Hulp ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

/// Fixed-size rectangle centered in `area`, shrunk to fit
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    rect
}
