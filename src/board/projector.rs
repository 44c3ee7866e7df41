//! Projection of a game state into a render tree.
//!
//! The projection only carries flags and enums. Choosing colours, glyphs
//! and hover affordances from them is the view's job.

use super::index::MoveMap;
use crate::games::uttt::{Cell, CellCoord, Completion, GameState, GameStatus, Player, Position};
use serde::Serialize;
use tracing::{instrument, warn};

/// Presentation record for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellProjection {
    /// Where the cell is.
    pub coord: CellCoord,
    /// Who marked it, if anyone.
    pub occupancy: Cell,
    /// Whether clicking it plays a legal move.
    pub clickable: bool,
    /// Whether it belongs to the line that won its outer square.
    pub emphasized: bool,
}

/// Presentation record for one outer square.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SquareProjection {
    /// Where the square is.
    pub position: Position,
    /// Whether the next move is forced into this square.
    pub active: bool,
    /// Won, drawn or still open.
    pub completion: Completion,
    /// Whether the square belongs to the line that won the game.
    pub emphasized: bool,
    /// Cells in row-major order.
    pub cells: [CellProjection; 9],
}

/// Presentation tree for the whole board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardProjection {
    /// Outer squares in row-major order.
    pub squares: [SquareProjection; 9],
    /// Player to move.
    pub turn: Player,
    /// Overall status.
    pub status: GameStatus,
    /// Whether the player to move may choose any open square.
    pub free_choice: bool,
}

impl BoardProjection {
    /// Gets the projected outer square at the given position.
    pub fn square(&self, pos: Position) -> &SquareProjection {
        &self.squares[pos.to_index()]
    }

    /// Gets the projected cell at the given coordinate.
    pub fn cell(&self, coord: CellCoord) -> &CellProjection {
        &self.square(coord.outer).cells[coord.inner.to_index()]
    }

    /// Iterates over all 81 projected cells.
    pub fn cells(&self) -> impl Iterator<Item = &CellProjection> {
        self.squares.iter().flat_map(|square| square.cells.iter())
    }

    /// Checks if any cell can be clicked.
    pub fn is_interactive(&self) -> bool {
        self.cells().any(|cell| cell.clickable)
    }
}

/// Projects a game state and its move index into a render tree.
///
/// Walks the outer grid and each inner grid in row-major order. Pure: the
/// same inputs always give an equal projection.
#[instrument(level = "debug", skip(state, moves), fields(indexed = moves.len()))]
pub fn project(state: &GameState, moves: &MoveMap) -> BoardProjection {
    let board_triple = state.winning_triple();

    let squares = std::array::from_fn(|outer_idx| {
        let position = Position::ALL[outer_idx];
        let square = state.square(position);
        let completion = square.completion();
        let local_triple = square.winning_triple();

        let cells = std::array::from_fn(|inner_idx| {
            let inner = Position::ALL[inner_idx];
            let coord = CellCoord::new(position, inner);
            let occupancy = square.cell(inner);
            let indexed = moves.contains(coord);
            if indexed && !occupancy.is_empty() {
                warn!(%coord, "Occupied cell found in move index");
            }

            CellProjection {
                coord,
                occupancy,
                clickable: indexed && occupancy.is_empty(),
                emphasized: local_triple.is_some_and(|t| t.contains(inner)),
            }
        });

        SquareProjection {
            position,
            active: state.active().is(position),
            completion,
            emphasized: completion.is_complete()
                && board_triple.is_some_and(|t| t.contains(position)),
            cells,
        }
    });

    BoardProjection {
        squares,
        turn: state.turn(),
        status: state.status(),
        free_choice: state.active().forced().is_none() && !state.status().is_over(),
    }
}
