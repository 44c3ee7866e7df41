//! First-class action types for ultimate tic-tac-toe.
//!
//! Moves are produced by the engine's legal-move list and handed back to
//! the engine to apply. Outside the engine only their coordinates matter.

use super::position::{CellCoord, Position};
use super::types::Player;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A move: a player marking one cell of one outer square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The cell being marked.
    pub coord: CellCoord,
}

impl Move {
    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the targeted cell.
    pub fn coord(&self) -> CellCoord {
        self.coord
    }

    /// Returns the targeted outer square.
    pub fn outer(&self) -> Position {
        self.coord.outer
    }

    /// Returns the targeted cell within the outer square.
    pub fn inner(&self) -> Position {
        self.coord.inner
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.coord)
    }
}

/// Error returned by the engine when a move cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The game is already decided.
    #[display("Game is already over")]
    GameOver,

    /// The cell is already marked.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(#[error(not(source))] CellCoord),

    /// The move targets another outer square than the active one.
    #[display("Cell {} is outside the active square", _0)]
    OutsideActiveSquare(#[error(not(source))] CellCoord),

    /// The targeted outer square is already won or drawn.
    #[display("Square {} is already completed", _0)]
    SquareCompleted(#[error(not(source))] Position),

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(#[error(not(source))] Player),
}
