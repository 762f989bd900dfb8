//! Terminal sound cues

use crate::engine::{Sound, SoundPlayer};
use std::io::{self, Write};
use tracing::debug;

/// Rings the terminal bell for misses and round endings
///
/// Correct guesses stay quiet; a bell on every keystroke is noise.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalBell;

impl TerminalBell {
    /// Whether a cue produces a bell
    #[must_use]
    pub const fn rings_for(sound: Sound) -> bool {
        !matches!(sound, Sound::Correct)
    }
}

impl SoundPlayer for TerminalBell {
    fn play(&mut self, sound: Sound) {
        if !Self::rings_for(sound) {
            return;
        }

        let mut out = io::stdout();
        if let Err(e) = out.write_all(b"\x07").and_then(|()| out.flush()) {
            debug!(?sound, error = %e, "could not ring bell");
        }
    }
}
