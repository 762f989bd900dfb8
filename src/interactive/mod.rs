//! Interactive TUI interface
//!
//! Full-screen play with ratatui: the engine pushes snapshots into a presenter
//! that the renderer draws from.

mod app;
mod keys;
mod rendering;

pub use app::{App, Message, MessageStyle, TuiPresenter, run_tui};
pub use keys::{Action, map_key};
