//! Simple interactive CLI mode
//!
//! Line-based play without the TUI

use crate::engine::{Dialog, GameEngine, GameStatus, Presenter, SoundPlayer, Toast};
use crate::output::{print_board, print_dialog, print_help, print_toast};
use crate::storage::SettingsStore;
use colored::Colorize;
use std::io::{self, Write};
use tracing::warn;

/// Presenter that prints to stdout and parks dialogs for the input loop
#[derive(Debug, Default)]
pub struct ConsolePresenter {
    pending: Option<Dialog>,
}

impl ConsolePresenter {
    /// Take the dialog raised by the last operation, if any
    pub fn take_dialog(&mut self) -> Option<Dialog> {
        self.pending.take()
    }
}

impl Presenter for ConsolePresenter {
    fn update_display(&mut self, status: &GameStatus) {
        print_board(status);
    }

    fn show_message(&mut self, dialog: Dialog) {
        self.pending = Some(dialog);
    }

    fn show_toast(&mut self, toast: Toast) {
        print_toast(&toast);
    }
}

/// What a line of input asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Guess(char),
    Hint,
    NewGame,
    ToggleSound,
    Help,
    Quit,
    Empty,
}

impl Command {
    /// Parse a line; whole words are commands, anything else guesses its first character
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim().to_lowercase();
        match line.as_str() {
            "" => Self::Empty,
            "hint" | "?" => Self::Hint,
            "new" | "nieuw" => Self::NewGame,
            "sound" | "geluid" => Self::ToggleSound,
            "help" => Self::Help,
            "quit" | "exit" | "stop" => Self::Quit,
            _ => line.chars().next().map_or(Self::Empty, Self::Guess),
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<S: SoundPlayer>(
    engine: &mut GameEngine<ConsolePresenter, S>,
    store: &SettingsStore,
    word_count: usize,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Woordpuzzel - Console Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Raad de Nederlandse woorden letter voor letter.");
    println!("Typ 'help' voor de commando's.");

    start_round(engine, store, word_count);

    loop {
        if let Some(dialog) = engine.presenter_mut().take_dialog() {
            print_dialog(&dialog);
            record_round_end(engine, store);

            let answer = get_user_input(&format!("Enter = {}, 'quit' = stoppen", dialog.button))?;
            if Command::parse(&answer) == Command::Quit {
                println!("\n👋 Tot ziens!\n");
                return Ok(());
            }

            engine.acknowledge(dialog.action);
            record_round_start(store);
            continue;
        }

        match Command::parse(&get_user_input("Letter")?) {
            Command::Empty => {}
            Command::Quit => {
                println!("\n👋 Tot ziens!\n");
                return Ok(());
            }
            Command::Help => print_help(),
            Command::NewGame => start_round(engine, store, word_count),
            Command::ToggleSound => {
                let enabled = engine.toggle_sound();
                if store.is_enabled()
                    && let Err(e) = store.update_sound(enabled)
                {
                    warn!(error = %e, "could not save sound preference");
                }
                println!("  Geluid {}", if enabled { "aan" } else { "uit" });
            }
            Command::Hint => {
                if !engine.use_hint() {
                    println!(
                        "  {}",
                        "Hints zijn alleen beschikbaar met minder dan 2 levens".yellow()
                    );
                }
            }
            Command::Guess(letter) => {
                if !engine.guess_letter(letter) {
                    println!(
                        "  {}",
                        "Letter al geraden of spel niet actief".red()
                    );
                }
            }
        }
    }
}

fn start_round<S: SoundPlayer>(
    engine: &mut GameEngine<ConsolePresenter, S>,
    store: &SettingsStore,
    word_count: usize,
) {
    engine.start_new_game(word_count);
    record_round_start(store);
}

fn record_round_start(store: &SettingsStore) {
    if store.is_enabled()
        && let Err(e) = store.increment_games_played()
    {
        warn!(error = %e, "could not record started round");
    }
}

fn record_round_end<S: SoundPlayer>(engine: &GameEngine<ConsolePresenter, S>, store: &SettingsStore) {
    if !store.is_enabled() {
        return;
    }
    match store.record_round_end(&engine.status()) {
        Ok(true) => println!("  {}", "🏆 Nieuwe hoogste score!".bright_yellow().bold()),
        Ok(false) => {}
        Err(e) => warn!(error = %e, "could not record finished round"),
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    // EOF behaves like quit
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::engine::{DialogAction, Phase, Silent};
    use crate::wordlists::WordPool;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn parse_commands() {
        assert_eq!(Command::parse("hint"), Command::Hint);
        assert_eq!(Command::parse(" NEW "), Command::NewGame);
        assert_eq!(Command::parse("geluid"), Command::ToggleSound);
        assert_eq!(Command::parse("quit"), Command::Quit);
        assert_eq!(Command::parse("help"), Command::Help);
        assert_eq!(Command::parse(""), Command::Empty);
    }

    #[test]
    fn parse_guesses_first_letter() {
        assert_eq!(Command::parse("a"), Command::Guess('a'));
        assert_eq!(Command::parse("Q"), Command::Guess('q'));
        assert_eq!(Command::parse("huis"), Command::Guess('h'));
    }

    #[test]
    fn console_presenter_parks_dialog() {
        let pool = WordPool::from_words(vec![Word::new("OOG").unwrap()]);
        let mut engine = GameEngine::new(pool, ConsolePresenter::default(), Silent)
            .with_rng(StdRng::seed_from_u64(0));
        engine.start_new_game(1);
        assert!(engine.presenter_mut().take_dialog().is_none());

        for letter in ['O', 'O', 'G'] {
            engine.guess_letter(letter);
        }
        assert_eq!(engine.phase(), Phase::Won);

        let dialog = engine.presenter_mut().take_dialog().unwrap();
        assert_eq!(dialog.action, DialogAction::NextWord);
        assert!(engine.presenter_mut().take_dialog().is_none());
    }
}
