//! TUI application state and logic

use super::keys::{Action, map_key};
use crate::audio::TerminalBell;
use crate::engine::{Dialog, GameEngine, GameStatus, Presenter, SoundPlayer, Toast, ToastKind};
use crate::storage::SettingsStore;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::warn;

/// Messages kept in the log panel
const MAX_MESSAGES: usize = 5;

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl From<ToastKind> for MessageStyle {
    fn from(kind: ToastKind) -> Self {
        match kind {
            ToastKind::Success => Self::Success,
            ToastKind::Info => Self::Info,
            ToastKind::Error => Self::Error,
        }
    }
}

/// Presenter that keeps what the renderer needs
#[derive(Debug, Default)]
pub struct TuiPresenter {
    pub status: Option<GameStatus>,
    pub dialog: Option<Dialog>,
    pub messages: Vec<Message>,
}

impl TuiPresenter {
    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

impl Presenter for TuiPresenter {
    fn update_display(&mut self, status: &GameStatus) {
        self.status = Some(status.clone());
    }

    fn show_message(&mut self, dialog: Dialog) {
        self.dialog = Some(dialog);
    }

    fn show_toast(&mut self, toast: Toast) {
        let text = format!("{} {}", toast.title, toast.body);
        self.add_message(&text, toast.kind.into());
    }
}

/// Application state
pub struct App<S = TerminalBell> {
    pub engine: GameEngine<TuiPresenter, S>,
    pub store: SettingsStore,
    pub word_count: usize,
    pub show_help: bool,
    pub should_quit: bool,
}

impl<S: SoundPlayer> App<S> {
    #[must_use]
    pub fn new(engine: GameEngine<TuiPresenter, S>, store: SettingsStore, word_count: usize) -> Self {
        Self {
            engine,
            store,
            word_count,
            show_help: false,
            should_quit: false,
        }
    }

    /// Latest snapshot pushed by the engine
    #[must_use]
    pub fn status(&self) -> Option<&GameStatus> {
        self.engine.presenter().status.as_ref()
    }

    #[must_use]
    pub fn dialog(&self) -> Option<&Dialog> {
        self.engine.presenter().dialog.as_ref()
    }

    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.engine.presenter().messages
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.engine.presenter_mut().add_message(text, style);
    }

    pub fn new_game(&mut self) {
        self.engine.presenter_mut().dialog = None;
        self.engine.start_new_game(self.word_count);
        self.record_round_start();
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Help => self.show_help = !self.show_help,
            Action::Dismiss => {
                self.show_help = false;
                self.engine.presenter_mut().dialog = None;
            }
            Action::Confirm => self.confirm(),
            Action::NewGame => {
                self.new_game();
                self.add_message("Nieuw spel gestart! (Ctrl+N)", MessageStyle::Success);
            }
            Action::ToggleSound => {
                let enabled = self.engine.toggle_sound();
                if self.store.is_enabled()
                    && let Err(e) = self.store.update_sound(enabled)
                {
                    warn!(error = %e, "could not save sound preference");
                }
                let text = format!("Geluid {} (Ctrl+S)", if enabled { "aan" } else { "uit" });
                self.add_message(&text, MessageStyle::Info);
            }
            Action::Hint => {
                if self.dialog().is_some() {
                    return;
                }
                let was_over = self.engine.phase().is_over();
                if !self.engine.use_hint() {
                    self.add_message(
                        "Hints zijn alleen beschikbaar met minder dan 2 levens",
                        MessageStyle::Error,
                    );
                }
                self.after_move(was_over);
            }
            Action::Guess(letter) => {
                if self.dialog().is_some() {
                    return;
                }
                let was_over = self.engine.phase().is_over();
                if !self.engine.guess_letter(letter) {
                    self.add_message(
                        "Letter al geraden of spel niet actief",
                        MessageStyle::Error,
                    );
                }
                self.after_move(was_over);
            }
        }
    }

    fn confirm(&mut self) {
        if let Some(dialog) = self.engine.presenter_mut().dialog.take() {
            self.engine.acknowledge(dialog.action);
            self.record_round_start();
        } else if self.engine.phase().is_over() {
            self.new_game();
            self.add_message("Nieuw spel gestart!", MessageStyle::Success);
        }
    }

    fn after_move(&mut self, was_over: bool) {
        if was_over || !self.engine.phase().is_over() || !self.store.is_enabled() {
            return;
        }

        match self.store.record_round_end(&self.engine.status()) {
            Ok(true) => self.add_message("🏆 Nieuwe hoogste score!", MessageStyle::Success),
            Ok(false) => {}
            Err(e) => warn!(error = %e, "could not record finished round"),
        }
    }

    fn record_round_start(&self) {
        if self.store.is_enabled()
            && let Err(e) = self.store.increment_games_played()
        {
            warn!(error = %e, "could not record started round");
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: SoundPlayer>(mut app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    app.new_game();
    app.add_message("Welkom! Raad de woorden letter voor letter.", MessageStyle::Info);
    app.add_message("F1 voor hulp, Ctrl+C om te stoppen.", MessageStyle::Info);

    // Run app
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, S: SoundPlayer>(
    terminal: &mut Terminal<B>,
    app: &mut App<S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if let Some(action) = map_key(key) {
                app.handle_action(action);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::engine::{DialogAction, Phase, Silent};
    use crate::wordlists::WordPool;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn app(word: &str) -> App<Silent> {
        let pool = WordPool::from_words(vec![Word::new(word).unwrap()]);
        let engine = GameEngine::new(pool, TuiPresenter::default(), Silent)
            .with_rng(StdRng::seed_from_u64(0));
        let mut app = App::new(engine, SettingsStore::disabled(), 1);
        app.new_game();
        app
    }

    #[test]
    fn new_game_pushes_status() {
        let app = app("HUIS");
        let status = app.status().unwrap();
        assert_eq!(status.words, vec!["HUIS"]);
        assert_eq!(status.phase, Phase::Playing);
    }

    #[test]
    fn guesses_update_cached_status() {
        let mut app = app("HUIS");
        app.handle_action(Action::Guess('H'));
        assert_eq!(app.status().unwrap().word_progress, vec!["H _ _ _"]);
    }

    #[test]
    fn rejected_guess_logs_error() {
        let mut app = app("HUIS");
        app.handle_action(Action::Guess('H'));
        app.handle_action(Action::Guess('H'));
        let last = app.messages().last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert_eq!(last.text, "Letter al geraden of spel niet actief");
    }

    #[test]
    fn win_opens_dialog_and_confirm_starts_next_round() {
        let mut app = app("OOG");
        for letter in ['O', 'O', 'G'] {
            app.handle_action(Action::Guess(letter));
        }
        assert_eq!(app.engine.phase(), Phase::Won);
        assert_eq!(app.dialog().unwrap().action, DialogAction::NextWord);

        // Letters are ignored while the dialog is open
        app.handle_action(Action::Guess('X'));
        assert_eq!(app.engine.status().wrong_letters.len(), 0);

        app.handle_action(Action::Confirm);
        assert!(app.dialog().is_none());
        assert_eq!(app.engine.phase(), Phase::Playing);
        assert_eq!(app.engine.score(), 0);
    }

    #[test]
    fn dismiss_then_enter_starts_new_round() {
        let mut app = app("OOG");
        for letter in ['X', 'Y', 'Z', 'Q', 'J'] {
            app.handle_action(Action::Guess(letter));
        }
        assert_eq!(app.engine.phase(), Phase::Lost);

        app.handle_action(Action::Dismiss);
        assert!(app.dialog().is_none());
        assert_eq!(app.engine.phase(), Phase::Lost);

        app.handle_action(Action::Confirm);
        assert_eq!(app.engine.phase(), Phase::Playing);
    }

    #[test]
    fn hint_refusal_is_reported() {
        let mut app = app("HUIS");
        app.handle_action(Action::Hint);
        assert_eq!(app.messages().last().unwrap().style, MessageStyle::Error);
        assert_eq!(app.engine.hints_used(), 0);
    }

    #[test]
    fn streak_toast_reaches_message_log() {
        let mut app = app("HUIS");
        app.handle_action(Action::Guess('X'));
        for letter in ['H', 'U', 'I'] {
            app.handle_action(Action::Guess(letter));
        }
        let last = app.messages().last().unwrap();
        assert_eq!(last.style, MessageStyle::Success);
        assert!(last.text.starts_with("Streak Bonus!"));
    }

    #[test]
    fn message_log_is_bounded() {
        let mut app = app("HUIS");
        for _ in 0..10 {
            app.handle_action(Action::ToggleSound);
        }
        assert_eq!(app.messages().len(), MAX_MESSAGES);
    }

    #[test]
    fn quit_and_help() {
        let mut app = app("HUIS");
        app.handle_action(Action::Help);
        assert!(app.show_help);
        app.handle_action(Action::Dismiss);
        assert!(!app.show_help);
        app.handle_action(Action::Quit);
        assert!(app.should_quit);
    }
}
