//! Console card duel.
//!
//! Options: --mode, --seed, --suit, --no-pause, --no-color, --transcript,
//! --replay, -v

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use card_duel::cards::Suit;
use card_duel::console::{
    init_logging, run_session, LinePrompt, SessionConfig, TerminalPrompt, Transcript,
};
use card_duel::game::GameMode;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Game mode: 1 = best of 3 mini-rounds, 2 = sum of cards. Asked for if omitted.
    #[arg(short, long)]
    mode: Option<GameMode>,

    /// Seed for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,

    /// Suit used to draw the card glyphs.
    #[arg(long, value_enum, default_value_t = Suit::Spades)]
    suit: Suit,

    /// Draw without waiting for ENTER.
    #[arg(long)]
    no_pause: bool,

    /// Plain, uncoloured output.
    #[arg(long)]
    no_color: bool,

    /// Write a JSON transcript of the game here.
    #[arg(long)]
    transcript: Option<PathBuf>,

    /// Replay the seed and mode recorded in a transcript.
    #[arg(long, conflicts_with_all = ["mode", "seed"])]
    replay: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl From<Args> for SessionConfig {
    fn from(args: Args) -> Self {
        let mut config = SessionConfig::default()
            .with_suit(args.suit)
            .with_pause(!args.no_pause)
            .with_color(!args.no_color)
            .with_verbosity(args.verbose);
        config.mode = args.mode;
        config.seed = args.seed;
        config.transcript = args.transcript;
        config
    }
}

fn main() -> ExitCode {
    let mut args = Args::parse();
    let replay = args.replay.take();
    let mut config = SessionConfig::from(args);
    if let Err(err) = init_logging(config.log_level()) {
        eprintln!("{err}");
    }

    if let Some(path) = replay {
        match Transcript::read(&path) {
            Ok(transcript) => {
                log::info!("replaying {}", path.display());
                config = config.with_replay(&transcript);
            }
            Err(err) => {
                log::error!("{}: {err}", path.display());
                return ExitCode::FAILURE;
            }
        }
    }

    let outcome = if io::stdin().is_terminal() {
        run_session(&config, TerminalPrompt::new(), io::stdout())
    } else {
        run_session(&config, LinePrompt::new(io::stdin().lock(), io::stdout()), io::stdout())
    };

    match outcome {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
