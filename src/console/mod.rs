//! Console front end: prompts, rendering, logging, and the session driver.
//!
//! The game engine never touches stdin or stdout. This module is the
//! collaborator that does: it asks for a mode, paces draws on ENTER, turns
//! `GameEvent`s into text, and optionally writes a JSON transcript.
//!
//! Cancelling input is only meaningful at the mode prompt. Once a game has
//! started, closed input just turns pacing off and the game plays out.

pub mod config;
pub mod prompt;
pub mod render;
pub mod session;

use thiserror::Error;

pub use config::SessionConfig;
pub use prompt::{choose_mode, LinePrompt, PlainTheme, Prompt, TerminalPrompt, MODE_PROMPT};
pub use render::{ConsoleSession, DRAW_PROMPT, NEXT_ROUND_PROMPT};
pub use session::{run_session, Transcript};

/// Failures of the console front end.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("transcript failed: {0}")]
    Transcript(#[from] serde_json::Error),

    #[error("logger already initialised: {0}")]
    Logger(#[from] log::SetLoggerError),
}

/// Initialise terminal logging on stderr.
///
/// Location, target and thread columns are off. Game text stays on stdout.
pub fn init_logging(level: log::LevelFilter) -> Result<(), ConsoleError> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;
    Ok(())
}
