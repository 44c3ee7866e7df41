//! Win detection logic.

use super::super::position::Position;
use super::super::types::{Player, WinningTriple};
use super::Grid;
use tracing::instrument;

/// The eight lines of a 3x3 grid, in the order they are checked.
pub const LINES: [[Position; 3]; 8] = [
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::BottomLeft, Position::Center, Position::TopRight],
];

/// Checks if there is a winner on the grid.
///
/// Returns the player and the first completed line, `None` otherwise.
#[instrument(level = "trace", skip(grid))]
pub fn check_winner<G: Grid>(grid: &G) -> Option<(Player, WinningTriple)> {
    for [a, b, c] in LINES {
        if let Some(player) = grid.owner(a) {
            if grid.owner(b) == Some(player) && grid.owner(c) == Some(player) {
                return WinningTriple::new([a, b, c]).map(|triple| (player, triple));
            }
        }
    }

    None
}
