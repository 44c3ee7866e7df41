//! Draw detection logic.

use super::super::position::Position;
use super::Grid;
use tracing::instrument;

/// Checks if every position of the grid is filled.
///
/// A full grid with no winner is a draw.
#[instrument(level = "trace", skip(grid))]
pub fn is_full<G: Grid>(grid: &G) -> bool {
    Position::ALL.iter().all(|pos| grid.is_filled(*pos))
}
