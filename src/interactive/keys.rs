//! Key mapping from terminal events to game actions

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Something the player asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Guess(char),
    Hint,
    /// Acknowledge the open dialog, or start a new round once the current one is over
    Confirm,
    Dismiss,
    NewGame,
    ToggleSound,
    Help,
    Quit,
}

/// Map keyboard input to game actions.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c' | 'C' | 'q' | 'Q') => Some(Action::Quit),
            KeyCode::Char('n' | 'N') => Some(Action::NewGame),
            KeyCode::Char('s' | 'S') => Some(Action::ToggleSound),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(c) if c.is_ascii_alphabetic() => Some(Action::Guess(c.to_ascii_uppercase())),
        KeyCode::Char(' ') => Some(Action::Hint),
        KeyCode::Enter => Some(Action::Confirm),
        KeyCode::Esc => Some(Action::Dismiss),
        KeyCode::F(1) => Some(Action::Help),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn letters_guess_uppercase() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('a'))),
            Some(Action::Guess('A'))
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('Z'), KeyModifiers::SHIFT)),
            Some(Action::Guess('Z'))
        );
    }

    #[test]
    fn control_shortcuts() {
        assert_eq!(map_key(ctrl('c')), Some(Action::Quit));
        assert_eq!(map_key(ctrl('q')), Some(Action::Quit));
        assert_eq!(map_key(ctrl('n')), Some(Action::NewGame));
        assert_eq!(map_key(ctrl('s')), Some(Action::ToggleSound));
        assert_eq!(map_key(ctrl('x')), None);
    }

    #[test]
    fn special_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char(' '))), Some(Action::Hint));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Enter)), Some(Action::Confirm));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Esc)), Some(Action::Dismiss));
        assert_eq!(map_key(KeyEvent::from(KeyCode::F(1))), Some(Action::Help));
    }

    #[test]
    fn other_keys_ignored() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('1'))), None);
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('é'))), None);
        assert_eq!(map_key(KeyEvent::from(KeyCode::Tab)), None);
    }
}
