//! Command-line interface for strictly_uttt.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly UTTT - ultimate tic-tac-toe board with strict move dispatch
#[derive(Parser, Debug)]
#[command(name = "strictly_uttt")]
#[command(about = "Ultimate tic-tac-toe board projection and move dispatch", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the board configuration file
    #[arg(long, global = true, default_value = "strictly_uttt.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play on the interactive terminal board
    Play,

    /// Print the legal moves of a state as JSON
    Moves {
        /// JSON game state (initial state when omitted)
        #[arg(long)]
        state: Option<PathBuf>,
    },

    /// Print the board projection of a state as JSON
    Project {
        /// JSON game state (initial state when omitted)
        #[arg(long)]
        state: Option<PathBuf>,
    },

    /// Attempt one move and print the resulting state as JSON
    Apply {
        /// JSON game state
        #[arg(long)]
        state: PathBuf,

        /// Outer square as X,Y
        #[arg(long, value_parser = parse_pair)]
        outer: (usize, usize),

        /// Cell within the outer square as X,Y
        #[arg(long, value_parser = parse_pair)]
        inner: (usize, usize),
    },
}

/// Parses an `X,Y` pair of grid components in `0..3`.
pub fn parse_pair(s: &str) -> Result<(usize, usize), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{}'", s))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<usize>()
            .map_err(|e| format!("invalid component '{}': {}", part, e))
            .and_then(|v| {
                if v < 3 {
                    Ok(v)
                } else {
                    Err(format!("component {} out of range 0..3", v))
                }
            })
    };
    Ok((parse(x)?, parse(y)?))
}
