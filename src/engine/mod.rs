//! Game engine
//!
//! The round state machine, its read-only snapshot, the rule constants and the
//! ports it talks to collaborators through.

mod game;
pub mod ports;
pub mod rules;
mod status;

pub use game::GameEngine;
pub use ports::{
    Dialog, DialogAction, NullPresenter, Presenter, Silent, Sound, SoundPlayer, Toast, ToastKind,
};
pub use status::{GameStatus, LetterStatus, Phase};
