//! Screen geometry of the board and hit-testing against it.
//!
//! Each outer square is a 15×7 block. Blocks are separated by two columns
//! and one row of frame. Inside a block the cells sit on a 4-column by
//! 2-row pitch, starting at (2, 1).

use crate::games::uttt::{CellCoord, Position};
use ratatui::layout::Rect;

/// Width of one outer square.
pub const SQUARE_WIDTH: u16 = 15;
/// Height of one outer square.
pub const SQUARE_HEIGHT: u16 = 7;
/// Columns of frame between outer squares.
pub const GAP_X: u16 = 2;
/// Rows of frame between outer squares.
pub const GAP_Y: u16 = 1;
/// Width of the whole board.
pub const BOARD_WIDTH: u16 = SQUARE_WIDTH * 3 + GAP_X * 2;
/// Height of the whole board.
pub const BOARD_HEIGHT: u16 = SQUARE_HEIGHT * 3 + GAP_Y * 2;

const CELL_LEFT: u16 = 2;
const CELL_TOP: u16 = 1;
const CELL_PITCH_X: u16 = 4;
const CELL_PITCH_Y: u16 = 2;
const CELL_WIDTH: u16 = 3;

/// Glyph art for an outer square, one string per row.
pub type Glyph = [&'static str; SQUARE_HEIGHT as usize];

/// Empty inner grid.
pub const GRID: Glyph = [
    "               ",
    "     │   │     ",
    "  ───┼───┼───  ",
    "     │   │     ",
    "  ───┼───┼───  ",
    "     │   │     ",
    "               ",
];

/// Overlay for a square won by X.
pub const BIG_X: Glyph = [
    "               ",
    "   ██     ██   ",
    "     ██ ██     ",
    "      ███      ",
    "     ██ ██     ",
    "   ██     ██   ",
    "               ",
];

/// Overlay for a square won by O.
pub const BIG_O: Glyph = [
    "               ",
    "     █████     ",
    "   ██     ██   ",
    "   ██     ██   ",
    "   ██     ██   ",
    "     █████     ",
    "               ",
];

/// Overlay for a drawn square.
pub const BIG_DRAW: Glyph = [
    "               ",
    "               ",
    "               ",
    "   █████████   ",
    "               ",
    "               ",
    "               ",
];

/// Where the board was last drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    origin: Rect,
}

impl BoardLayout {
    /// Centres the board in `area`, `None` when it does not fit.
    pub fn centered(area: Rect) -> Option<Self> {
        if area.width < BOARD_WIDTH || area.height < BOARD_HEIGHT {
            return None;
        }
        let x = area.x + (area.width - BOARD_WIDTH) / 2;
        let y = area.y + (area.height - BOARD_HEIGHT) / 2;
        Some(Self {
            origin: Rect::new(x, y, BOARD_WIDTH, BOARD_HEIGHT),
        })
    }

    /// The whole board.
    pub fn area(&self) -> Rect {
        self.origin
    }

    /// The block of one outer square.
    pub fn square(&self, pos: Position) -> Rect {
        Rect::new(
            self.origin.x + pos.x() as u16 * (SQUARE_WIDTH + GAP_X),
            self.origin.y + pos.y() as u16 * (SQUARE_HEIGHT + GAP_Y),
            SQUARE_WIDTH,
            SQUARE_HEIGHT,
        )
    }

    /// The three columns showing one cell's mark.
    pub fn cell(&self, coord: CellCoord) -> Rect {
        let square = self.square(coord.outer);
        Rect::new(
            square.x + CELL_LEFT + coord.inner.x() as u16 * CELL_PITCH_X,
            square.y + CELL_TOP + coord.inner.y() as u16 * CELL_PITCH_Y,
            CELL_WIDTH,
            1,
        )
    }

    /// Resolves a screen position to the cell under it.
    ///
    /// Frame and square margins hit nothing; grid lines inside a square
    /// resolve to the nearest cell above or to the left.
    pub fn hit(&self, column: u16, row: u16) -> Option<CellCoord> {
        let origin = self.origin;
        if column < origin.x || row < origin.y {
            return None;
        }
        let (dx, dy) = (column - origin.x, row - origin.y);
        if dx >= BOARD_WIDTH || dy >= BOARD_HEIGHT {
            return None;
        }

        let (ox, lx) = (dx / (SQUARE_WIDTH + GAP_X), dx % (SQUARE_WIDTH + GAP_X));
        let (oy, ly) = (dy / (SQUARE_HEIGHT + GAP_Y), dy % (SQUARE_HEIGHT + GAP_Y));
        if lx < CELL_LEFT || lx >= SQUARE_WIDTH - CELL_LEFT {
            return None;
        }
        if ly < CELL_TOP || ly >= SQUARE_HEIGHT - CELL_TOP {
            return None;
        }

        let ix = (lx - CELL_LEFT) / CELL_PITCH_X;
        let iy = (ly - CELL_TOP) / CELL_PITCH_Y;
        CellCoord::from_xy((ox as usize, oy as usize), (ix as usize, iy as usize))
    }
}
