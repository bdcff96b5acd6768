//! Console session configuration.

use std::path::PathBuf;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::cards::Suit;
use crate::game::GameMode;

use super::session::Transcript;

/// Settings for one console session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Preselected mode. `None` asks the player.
    pub mode: Option<GameMode>,

    /// RNG seed. `None` draws a fresh one from the OS.
    pub seed: Option<u64>,

    /// Which suit's glyphs to show.
    pub suit: Suit,

    /// Wait for ENTER before each draw.
    pub pause: bool,

    /// Colour outcome lines.
    pub color: bool,

    /// Where to write the JSON transcript, if anywhere.
    pub transcript: Option<PathBuf>,

    /// 0 = warnings only, 1 = info, 2 = debug, 3+ = trace.
    pub verbosity: u8,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mode: None,
            seed: None,
            suit: Suit::Spades,
            pause: true,
            color: true,
            transcript: None,
            verbosity: 0,
        }
    }
}

impl SessionConfig {
    /// Skip the mode prompt.
    #[must_use]
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_suit(mut self, suit: Suit) -> Self {
        self.suit = suit;
        self
    }

    #[must_use]
    pub fn with_pause(mut self, pause: bool) -> Self {
        self.pause = pause;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Replay a recorded game: same mode, same seed.
    #[must_use]
    pub fn with_replay(self, transcript: &Transcript) -> Self {
        self.with_mode(transcript.mode).with_seed(transcript.seed)
    }

    /// Write a transcript to `path` after the game.
    #[must_use]
    pub fn with_transcript(mut self, path: impl Into<PathBuf>) -> Self {
        self.transcript = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Log level for the configured verbosity.
    #[must_use]
    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
