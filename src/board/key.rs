//! Lookup keys for outer squares and cells.

use crate::games::uttt::{CellCoord, Position};
use serde::Serialize;

/// Exact-match key for a coordinate on the board.
///
/// Outer-square keys and cell keys are different variants, so the two key
/// spaces never collide even where their components overlap. Keys are
/// compared for equality only; they have no ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CoordinateKey {
    /// An outer square (outer-x, outer-y).
    Square(Position),
    /// A cell (outer-x, outer-y, inner-x, inner-y).
    Cell(Position, Position),
}

impl CoordinateKey {
    /// Key for an outer square from raw components, `None` when out of range.
    pub fn square(ox: usize, oy: usize) -> Option<Self> {
        Position::from_xy(ox, oy).map(Self::Square)
    }

    /// Key for a cell from raw components, `None` when out of range.
    pub fn cell(ox: usize, oy: usize, ix: usize, iy: usize) -> Option<Self> {
        CellCoord::from_xy((ox, oy), (ix, iy)).map(Self::from)
    }

    /// The outer square this key refers to.
    pub fn outer(&self) -> Position {
        match self {
            CoordinateKey::Square(outer) | CoordinateKey::Cell(outer, _) => *outer,
        }
    }

    /// The cell this key refers to, `None` for outer-square keys.
    pub fn cell_coord(&self) -> Option<CellCoord> {
        match self {
            CoordinateKey::Square(_) => None,
            CoordinateKey::Cell(outer, inner) => Some(CellCoord::new(*outer, *inner)),
        }
    }

    /// The integer components in key order.
    pub fn components(&self) -> Vec<usize> {
        match self {
            CoordinateKey::Square(outer) => vec![outer.x(), outer.y()],
            CoordinateKey::Cell(outer, inner) => vec![outer.x(), outer.y(), inner.x(), inner.y()],
        }
    }
}

impl From<CellCoord> for CoordinateKey {
    fn from(coord: CellCoord) -> Self {
        CoordinateKey::Cell(coord.outer, coord.inner)
    }
}

impl From<Position> for CoordinateKey {
    fn from(outer: Position) -> Self {
        CoordinateKey::Square(outer)
    }
}

impl std::fmt::Display for CoordinateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.components().iter().map(|c| c.to_string()).collect();
        write!(f, "{}", parts.join(","))
    }
}
