//! Game rules for ultimate tic-tac-toe.
//!
//! Pure functions for evaluating a 3x3 grid. Both levels of the board
//! are evaluated with the same rules: an outer square through its cells,
//! the whole board through the completion of its outer squares.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};

use super::position::Position;
use super::types::{GameState, OuterSquare, Player, WinningTriple};

/// A 3x3 grid the rules can evaluate.
pub trait Grid {
    /// Player owning the position, if any.
    fn owner(&self, pos: Position) -> Option<Player>;

    /// Checks if the position is used up (no longer playable).
    fn is_filled(&self, pos: Position) -> bool;
}

impl Grid for OuterSquare {
    fn owner(&self, pos: Position) -> Option<Player> {
        self.cell(pos).player()
    }

    fn is_filled(&self, pos: Position) -> bool {
        !self.cell(pos).is_empty()
    }
}

/// The board level: a drawn outer square is filled but owned by nobody.
impl Grid for GameState {
    fn owner(&self, pos: Position) -> Option<Player> {
        self.square(pos).completion().winner()
    }

    fn is_filled(&self, pos: Position) -> bool {
        self.square(pos).completion().is_complete()
    }
}

/// Result of evaluating a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A player holds a line; the first line in [`LINES`] order.
    Won(Player, WinningTriple),
    /// Every position is used up and nobody holds a line.
    Full,
    /// Still playable.
    Open,
}

/// Evaluates a grid: a line wins before a full grid draws.
pub fn evaluate<G: Grid>(grid: &G) -> Outcome {
    if let Some((player, triple)) = check_winner(grid) {
        Outcome::Won(player, triple)
    } else if is_full(grid) {
        Outcome::Full
    } else {
        Outcome::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::uttt::types::Cell;

    #[test]
    fn test_evaluate_prefers_line_over_full_grid() {
        // X O X / X O O / X X O: full, with X down the left column
        let marks = [
            Player::X,
            Player::O,
            Player::X,
            Player::X,
            Player::O,
            Player::O,
            Player::X,
            Player::X,
            Player::O,
        ];
        let mut square = OuterSquare::new();
        for (pos, player) in Position::ALL.into_iter().zip(marks) {
            square.set(pos, Cell::Occupied(player));
        }
        let outcome = evaluate(&square);
        assert!(matches!(outcome, Outcome::Won(Player::X, t) if t.contains(Position::MiddleLeft)));
    }

    #[test]
    fn test_evaluate_open_and_full() {
        assert_eq!(evaluate(&OuterSquare::new()), Outcome::Open);

        // X O X / X O O / O X X: full without a line
        let marks = [
            Player::X,
            Player::O,
            Player::X,
            Player::X,
            Player::O,
            Player::O,
            Player::O,
            Player::X,
            Player::X,
        ];
        let mut square = OuterSquare::new();
        for (pos, player) in Position::ALL.into_iter().zip(marks) {
            square.set(pos, Cell::Occupied(player));
        }
        assert_eq!(evaluate(&square), Outcome::Full);
    }
}
