//! Keyboard cursor over the 9×9 grid of cells.

use crate::board::BoardProjection;
use crate::games::uttt::{CellCoord, Position};
use tracing::{debug, instrument};

const SPAN: usize = 9;

/// Direction of a cursor step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards row 8.
    Down,
    /// Towards column 0.
    Left,
    /// Towards column 8.
    Right,
}

/// Cursor over the flattened 9×9 grid, held as the cell it sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    coord: CellCoord,
}

impl Default for Cursor {
    fn default() -> Self {
        Self::at(CellCoord::new(Position::TopLeft, Position::TopLeft))
    }
}

impl Cursor {
    /// Places the cursor on a cell.
    pub fn at(coord: CellCoord) -> Self {
        Self { coord }
    }

    /// The cell under the cursor.
    pub fn coord(&self) -> CellCoord {
        self.coord
    }

    /// Column on the flattened grid (0-8).
    pub fn column(&self) -> usize {
        self.coord.outer.x() * 3 + self.coord.inner.x()
    }

    /// Row on the flattened grid (0-8).
    pub fn row(&self) -> usize {
        self.coord.outer.y() * 3 + self.coord.inner.y()
    }

    fn advance(&mut self, direction: Direction) {
        let (mut column, mut row) = (self.column(), self.row());
        match direction {
            Direction::Up => row = (row + SPAN - 1) % SPAN,
            Direction::Down => row = (row + 1) % SPAN,
            Direction::Left => column = (column + SPAN - 1) % SPAN,
            Direction::Right => column = (column + 1) % SPAN,
        }
        self.coord = CellCoord::new(
            Position::wrapping_xy(column / 3, row / 3),
            Position::wrapping_xy(column % 3, row % 3),
        );
    }

    /// Steps in `direction`, wrapping around and skipping cells that are
    /// not clickable. Stays put when a full lap finds nothing.
    #[instrument(level = "debug", skip(projection))]
    pub fn step(self, direction: Direction, projection: &BoardProjection) -> Self {
        let mut next = self;
        for _ in 1..SPAN {
            next.advance(direction);
            if projection.cell(next.coord()).clickable {
                return next;
            }
        }
        debug!("No clickable cell in that direction");
        self
    }

    /// Moves to the first clickable cell in row-major order unless the
    /// cursor already sits on one.
    pub fn snap(self, projection: &BoardProjection) -> Self {
        if projection.cell(self.coord()).clickable {
            return self;
        }
        projection
            .cells()
            .find(|cell| cell.clickable)
            .map(|cell| Self::at(cell.coord))
            .unwrap_or(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::MoveDispatcher;
    use crate::games::uttt::Rules;

    fn coord(outer: Position, inner: Position) -> CellCoord {
        CellCoord::new(outer, inner)
    }

    #[test]
    fn test_grid_mapping() {
        let c = coord(Position::MiddleRight, Position::BottomCenter);
        let cursor = Cursor::at(c);
        assert_eq!((cursor.column(), cursor.row()), (7, 5));
        assert_eq!(cursor.coord(), c);
    }

    #[test]
    fn test_steps_cross_square_boundaries() {
        let board = MoveDispatcher::started(Rules::new()).expect("start");
        let projection = board.projection().expect("started");
        let cursor = Cursor::at(coord(Position::TopLeft, Position::BottomRight));
        let cursor = cursor.step(Direction::Right, &projection);
        assert_eq!(cursor.coord(), coord(Position::TopCenter, Position::BottomLeft));
        let cursor = cursor.step(Direction::Down, &projection);
        assert_eq!(cursor.coord(), coord(Position::Center, Position::TopLeft));
        assert_eq!((cursor.column(), cursor.row()), (3, 3));
    }

    #[test]
    fn test_wraps_on_open_board() {
        let board = MoveDispatcher::started(Rules::new()).expect("start");
        let projection = board.projection().expect("started");
        let cursor = Cursor::default().step(Direction::Left, &projection);
        assert_eq!(cursor.coord(), coord(Position::TopRight, Position::TopRight));
        let cursor = cursor.step(Direction::Up, &projection);
        assert_eq!(cursor.coord(), coord(Position::BottomRight, Position::BottomRight));
    }

    #[test]
    fn test_skips_cells_outside_active_square() {
        let mut board = MoveDispatcher::started(Rules::new()).expect("start");
        board
            .attempt_move(coord(Position::TopLeft, Position::Center))
            .expect("no error");
        let projection = board.projection().expect("started");

        let cursor = Cursor::default().snap(&projection);
        assert_eq!(cursor.coord(), coord(Position::Center, Position::TopLeft));

        // Right from the centre square's middle row lands on its next cell,
        // then wraps past the other squares back into it
        let cursor = Cursor::at(coord(Position::Center, Position::MiddleRight));
        let cursor = cursor.step(Direction::Right, &projection);
        assert_eq!(cursor.coord(), coord(Position::Center, Position::MiddleLeft));
    }

    #[test]
    fn test_stays_put_without_target() {
        let mut board = MoveDispatcher::started(Rules::new()).expect("start");
        board
            .attempt_move(coord(Position::TopLeft, Position::Center))
            .expect("no error");
        let projection = board.projection().expect("started");

        // Column 0 crosses no cell of the centre square
        let cursor = Cursor::at(coord(Position::TopLeft, Position::TopLeft));
        assert_eq!(cursor.step(Direction::Down, &projection), cursor);
    }
}
