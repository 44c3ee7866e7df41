//! Strictly UTTT - ultimate tic-tac-toe board projection and move dispatch
//!
//! The board layer sits between a rule engine and a view. It never judges
//! legality itself: it indexes the engine's legal moves, projects the game
//! state into a render tree of flags, and turns clicks back into moves.
//!
//! # Architecture
//!
//! - **Games**: the ultimate tic-tac-toe rules behind the [`Engine`] trait
//! - **Board**: [`CoordinateKey`], [`MoveMap`], [`project`] and [`MoveDispatcher`]
//! - **Terminal board**: a ratatui view drawing [`BoardProjection`]s
//! - **Config**: TOML settings for the binary
//!
//! # Example
//!
//! ```
//! use strictly_uttt::{CellCoord, Dispatch, MoveDispatcher, Position, Rules};
//!
//! let mut board = MoveDispatcher::started(Rules::new())?;
//! let coord = CellCoord::new(Position::TopLeft, Position::Center);
//! assert!(matches!(board.attempt_move(coord)?, Dispatch::Applied(_)));
//!
//! // The opponent is now forced into the centre square
//! let projection = board.projection().expect("started");
//! assert!(projection.square(Position::Center).active);
//! # Ok::<(), strictly_uttt::BoardError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod config;
mod games;
mod tui;

// Crate-level exports - Board layer
pub use board::invariants;
pub use board::{
    BoardError, BoardErrorKind, BoardProjection, CellProjection, CoordinateKey, Dispatch,
    MoveDispatcher, MoveMap, Phase, SquareProjection, project,
};

// Crate-level exports - Configuration
pub use config::{BoardConfig, ConfigError, Theme};

// Crate-level exports - Game types (ultimate tic-tac-toe)
pub use games::uttt::rules;
pub use games::uttt::{
    ActiveSquare, Cell, CellCoord, Completion, Engine, GameState, GameStatus, Move, MoveError,
    OuterSquare, Player, Position, Rules, SIZE, WinningTriple,
};

// Crate-level exports - Terminal board
pub use tui::{App, BoardLayout, Cursor, Direction, Flow, Palette, run as run_board};
