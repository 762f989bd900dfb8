//! Collaborator ports
//!
//! The engine pushes display refreshes, dialogs, toasts and sound cues through these
//! traits. Every method has a no-op default, so `NullPresenter` and `Silent` let the
//! engine run headless.

use super::GameStatus;

/// Sound cues the engine emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sound {
    Correct,
    Wrong,
    Victory,
    GameOver,
}

/// What acknowledging a dialog does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    /// Start the next round
    NextWord,
    /// Reset the score and start a fresh round
    NewGame,
}

/// Modal end-of-round message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub title: String,
    pub body: String,
    pub button: String,
    pub action: DialogAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

/// Transient notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub body: String,
}

impl Toast {
    #[must_use]
    pub fn new(kind: ToastKind, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            body: body.into(),
        }
    }

    #[must_use]
    pub fn success(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, title, body)
    }
}

/// Presentation collaborator
pub trait Presenter {
    /// Called after every accepted state change
    fn update_display(&mut self, _status: &GameStatus) {}

    /// Show a modal dialog; the front-end calls `GameEngine::acknowledge` with its action
    fn show_message(&mut self, _dialog: Dialog) {}

    fn show_toast(&mut self, _toast: Toast) {}
}

/// Audio collaborator; playback is best-effort and never reports failure
pub trait SoundPlayer {
    fn play(&mut self, _sound: Sound) {}
}

/// Presenter that ignores everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPresenter;

impl Presenter for NullPresenter {}

/// Sound player that plays nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl SoundPlayer for Silent {}
