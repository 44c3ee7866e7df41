//! The rule engine behind the board.
//!
//! The board layer only talks to an [`Engine`]; [`Rules`] is the
//! standard implementation.

use super::action::{Move, MoveError};
use super::position::{CellCoord, Position};
use super::rules::{Outcome, evaluate};
use super::types::{ActiveSquare, Cell, Completion, GameState, GameStatus};
use tracing::{debug, info, instrument};

/// A rule engine producing and advancing game states.
///
/// Implementations are pure: the same inputs always give the same outputs
/// and states are never mutated in place.
pub trait Engine {
    /// Produces the starting state.
    fn initialize(&self) -> GameState;

    /// Lists every legal move for `state`. Empty iff the game is decided.
    fn legal_moves(&self, state: &GameState) -> Vec<Move>;

    /// Applies a move taken from `legal_moves(state)`, returning the successor state.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] when the move is not legal in `state`.
    fn apply_move(&self, state: &GameState, mov: Move) -> Result<GameState, MoveError>;
}

/// Standard ultimate tic-tac-toe rules.
///
/// - X moves first, anywhere.
/// - The inner position of a move selects the outer square the opponent
///   must play in next, unless that square is completed (then free).
/// - Three cells in a line win an outer square; three won outer squares
///   in a line win the game. Drawn squares count for nobody.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rules;

impl Rules {
    /// Creates the rule engine.
    pub fn new() -> Self {
        Self
    }

    fn open_cells(state: &GameState, outer: Position, moves: &mut Vec<Move>) {
        let square = state.square(outer);
        for inner in Position::ALL {
            if square.cell(inner).is_empty() {
                moves.push(Move::new(state.turn(), CellCoord::new(outer, inner)));
            }
        }
    }

    /// Checks the preconditions of a move.
    #[instrument(level = "debug", skip(state), fields(coord = %mov.coord))]
    fn check(state: &GameState, mov: &Move) -> Result<(), MoveError> {
        if state.status().is_over() {
            return Err(MoveError::GameOver);
        }
        if mov.player != state.turn() {
            return Err(MoveError::WrongPlayer(mov.player));
        }
        if !state.cell(mov.coord).is_empty() {
            return Err(MoveError::CellOccupied(mov.coord));
        }
        if let ActiveSquare::Forced(active) = state.active() {
            if active != mov.outer() {
                return Err(MoveError::OutsideActiveSquare(mov.coord));
            }
        }
        if state.square(mov.outer()).completion().is_complete() {
            return Err(MoveError::SquareCompleted(mov.outer()));
        }
        Ok(())
    }
}

impl Engine for Rules {
    #[instrument(skip(self))]
    fn initialize(&self) -> GameState {
        GameState::new()
    }

    #[instrument(level = "debug", skip(self, state), fields(active = ?state.active()))]
    fn legal_moves(&self, state: &GameState) -> Vec<Move> {
        if state.status().is_over() {
            return Vec::new();
        }

        let mut moves = Vec::with_capacity(81);
        match state.active() {
            ActiveSquare::Forced(outer) => Self::open_cells(state, outer, &mut moves),
            ActiveSquare::Free => {
                for outer in Position::ALL {
                    if !state.square(outer).completion().is_complete() {
                        Self::open_cells(state, outer, &mut moves);
                    }
                }
            }
        }
        debug!(count = moves.len(), "Legal moves listed");
        moves
    }

    #[instrument(skip_all, fields(%mov))]
    fn apply_move(&self, state: &GameState, mov: Move) -> Result<GameState, MoveError> {
        Self::check(state, &mov)?;

        let mut next = state.clone();
        let outer = mov.outer();

        next.square_mut(outer).set(mov.inner(), Cell::Occupied(mov.player));
        next.set_turn(mov.player.opponent());

        // Inner board result
        match evaluate(next.square(outer)) {
            Outcome::Won(winner, triple) => {
                info!(square = %outer, %winner, "Outer square won");
                next.square_mut(outer).complete(Completion::Won(winner), Some(triple));
            }
            Outcome::Full => {
                info!(square = %outer, "Outer square drawn");
                next.square_mut(outer).complete(Completion::Drawn, None);
            }
            Outcome::Open => {}
        }

        // Next active square, decided against the updated outer board
        let target = mov.inner();
        let active = if next.square(target).completion().is_complete() {
            ActiveSquare::Free
        } else {
            ActiveSquare::Forced(target)
        };
        next.set_active(active);

        // Whole board result
        match evaluate(&next) {
            Outcome::Won(winner, triple) => {
                info!(%winner, "Game won");
                next.set_status(GameStatus::Won(winner), Some(triple));
                next.set_active(ActiveSquare::Free);
            }
            Outcome::Full => {
                info!("Game drawn");
                next.set_status(GameStatus::Draw, None);
                next.set_active(ActiveSquare::Free);
            }
            Outcome::Open => {}
        }

        Ok(next)
    }
}
