//! Ultimate tic-tac-toe: a 3×3 grid of 3×3 tic-tac-toe boards.

mod action;
mod engine;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use engine::{Engine, Rules};
pub use position::{CellCoord, Position, SIZE};
pub use types::{
    ActiveSquare, Cell, Completion, GameState, GameStatus, OuterSquare, Player, WinningTriple,
};
