//! Whole console session: banner, mode prompt, game, transcript.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, GameRngState};
use crate::game::{GameController, GameEvent, GameMode, RecordingObserver, Tee};
use crate::rules::GameResult;

use super::config::SessionConfig;
use super::prompt::{choose_mode, Prompt};
use super::render::ConsoleSession;
use super::ConsoleError;

/// Everything needed to audit or replay one game.
///
/// Replaying means starting a game with the same `seed` and `mode`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    pub seed: u64,
    pub mode: GameMode,
    pub result: GameResult,
    /// RNG position after the last draw.
    pub rng: GameRngState,
    pub events: Vec<GameEvent>,
}

impl Transcript {
    /// Write as pretty-printed JSON.
    pub fn write(&self, path: &Path) -> Result<(), ConsoleError> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    /// Read a transcript written by [`Transcript::write`].
    pub fn read(path: &Path) -> Result<Self, ConsoleError> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(std::io::BufReader::new(file))?)
    }
}

/// Run one console session.
///
/// Returns `Ok(None)` when the player cancelled at the mode prompt.
pub fn run_session<P: Prompt, W: Write>(
    config: &SessionConfig,
    mut prompt: P,
    mut out: W,
) -> Result<Option<GameResult>, ConsoleError> {
    writeln!(out, "Welcome to the Simplified Card Game!")?;

    let mode = match config.mode {
        Some(mode) => mode,
        None => match choose_mode(&mut prompt, &mut out)? {
            Some(mode) => mode,
            None => {
                writeln!(out, "Game cancelled.")?;
                return Ok(None);
            }
        },
    };

    let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    let seed = rng.seed();
    log::info!("seed {seed}, {mode}");

    let mut controller = GameController::with_uniform(rng, config.suit.glyphs());
    let mut console = ConsoleSession::new(prompt, out, config);
    let mut recorder = RecordingObserver::new();

    let result = controller.start_game(
        mode,
        &mut Tee {
            first: &mut console,
            second: &mut recorder,
        },
    );

    let (_, mut out) = console.finish()?;

    if let Some(path) = &config.transcript {
        let transcript = Transcript {
            seed,
            mode,
            result,
            rng: controller.source().uniform().state(),
            events: recorder.into_events(),
        };
        transcript.write(path)?;
        log::info!("transcript written to {}", path.display());
    }

    writeln!(out, "\nThank you for playing!")?;
    writeln!(out, "\nDone.")?;
    Ok(Some(result))
}
