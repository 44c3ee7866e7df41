//! Strictly UTTT - Unified CLI
//!
//! Interactive terminal board plus JSON tools for inspecting and
//! advancing saved game states.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use strictly_uttt::{
    BoardConfig, CellCoord, Dispatch, Engine, GameState, MoveDispatcher, Rules, run_board,
};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = BoardConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config from {}", cli.config.display()))?;

    match cli.command {
        Command::Play => run_play(&config),
        Command::Moves { state } => {
            init_stderr_logging(&config);
            run_moves(state.as_deref())
        }
        Command::Project { state } => {
            init_stderr_logging(&config);
            run_project(state.as_deref())
        }
        Command::Apply {
            state,
            outer,
            inner,
        } => {
            init_stderr_logging(&config);
            run_apply(&state, outer, inner)
        }
    }
}

fn env_filter(config: &BoardConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Logs to stderr so JSON on stdout stays clean.
fn init_stderr_logging(config: &BoardConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run the interactive terminal board, logging to a file
fn run_play(config: &BoardConfig) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!("Starting Strictly UTTT");
    run_board(config)
}

/// Reads a JSON game state, or starts a fresh one when no path is given.
#[instrument]
fn load_state(path: Option<&Path>) -> Result<GameState> {
    let Some(path) = path else {
        debug!("No state file, using the initial state");
        return Ok(Rules::new().initialize());
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read state file {}", path.display()))?;
    let state = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse state file {}", path.display()))?;
    Ok(state)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

/// Print the legal moves of a state
fn run_moves(state: Option<&Path>) -> Result<()> {
    let state = load_state(state)?;
    let board = MoveDispatcher::with_state(Rules::new(), state)?;
    let mut moves: Vec<_> = board.moves().map(|m| m.moves().copied().collect()).unwrap_or_default();
    moves.sort_by_key(|m| (m.outer().to_index(), m.inner().to_index()));
    print_json(&moves)
}

/// Print the projection of a state
fn run_project(state: Option<&Path>) -> Result<()> {
    let state = load_state(state)?;
    let board = MoveDispatcher::with_state(Rules::new(), state)?;
    print_json(&board.projection())
}

/// Attempt one move and print the resulting state
#[instrument]
fn run_apply(state: &Path, outer: (usize, usize), inner: (usize, usize)) -> Result<()> {
    let coord = CellCoord::from_xy(outer, inner).context("Coordinate out of range")?;
    let mut board = MoveDispatcher::with_state(Rules::new(), load_state(Some(state))?)?;

    match board.attempt_move(coord)? {
        Dispatch::Applied(mov) => info!(%mov, phase = %board.phase(), "Move applied"),
        Dispatch::Ignored => info!(%coord, "Move not legal, state unchanged"),
    }
    print_json(&board.state())
}
