//! Positions on a 3x3 grid, used for both outer squares and inner cells.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Side length of every grid on the board.
pub const SIZE: usize = 3;

/// A position on a 3x3 grid.
///
/// The same nine positions address the outer squares of the board and
/// the cells inside each outer square. `x` is the column (left to right)
/// and `y` the row (top to bottom).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (x 0, y 0)
    TopLeft,
    /// Top-center (x 1, y 0)
    TopCenter,
    /// Top-right (x 2, y 0)
    TopRight,
    /// Middle-left (x 0, y 1)
    MiddleLeft,
    /// Center (x 1, y 1)
    Center,
    /// Middle-right (x 2, y 1)
    MiddleRight,
    /// Bottom-left (x 0, y 2)
    BottomLeft,
    /// Bottom-center (x 1, y 2)
    BottomCenter,
    /// Bottom-right (x 2, y 2)
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    ///
    /// Every traversal of a grid in this crate walks this array.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to its row-major index (0-8).
    pub fn to_index(self) -> usize {
        self.y() * SIZE + self.x()
    }

    /// Creates position from a row-major index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Column of this position (0-2).
    pub fn x(self) -> usize {
        match self {
            Position::TopLeft | Position::MiddleLeft | Position::BottomLeft => 0,
            Position::TopCenter | Position::Center | Position::BottomCenter => 1,
            Position::TopRight | Position::MiddleRight | Position::BottomRight => 2,
        }
    }

    /// Row of this position (0-2).
    pub fn y(self) -> usize {
        match self {
            Position::TopLeft | Position::TopCenter | Position::TopRight => 0,
            Position::MiddleLeft | Position::Center | Position::MiddleRight => 1,
            Position::BottomLeft | Position::BottomCenter | Position::BottomRight => 2,
        }
    }

    /// Creates a position from column and row, `None` when out of range.
    #[instrument(level = "trace")]
    pub fn from_xy(x: usize, y: usize) -> Option<Self> {
        Self::iter().find(|pos| pos.x() == x && pos.y() == y)
    }

    /// Creates a position from column and row, reducing both modulo the grid size.
    pub fn wrapping_xy(x: usize, y: usize) -> Self {
        Self::ALL[(y % SIZE) * SIZE + x % SIZE]
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Full address of a cell: the outer square and the cell inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct CellCoord {
    /// The outer square.
    pub outer: Position,
    /// The cell within the outer square.
    pub inner: Position,
}

impl CellCoord {
    /// Creates a cell coordinate from `(x, y)` pairs, `None` when either is out of range.
    pub fn from_xy((ox, oy): (usize, usize), (ix, iy): (usize, usize)) -> Option<Self> {
        Some(Self::new(Position::from_xy(ox, oy)?, Position::from_xy(ix, iy)?))
    }

    /// Iterates over all 81 cells, outer squares row-major, then cells row-major.
    pub fn all() -> impl Iterator<Item = CellCoord> {
        Position::ALL.into_iter().flat_map(|outer| {
            Position::ALL
                .into_iter()
                .map(move |inner| CellCoord::new(outer, inner))
        })
    }
}

impl std::fmt::Display for CellCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({},{})/({},{})",
            self.outer.x(),
            self.outer.y(),
            self.inner.x(),
            self.inner.y()
        )
    }
}
