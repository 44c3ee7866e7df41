//! Shared helpers for the integration tests.

#![allow(dead_code)]

use strictly_uttt::{CellCoord, Dispatch, MoveDispatcher, Rules};

/// A move written as ((outer-x, outer-y), (inner-x, inner-y)).
pub type Step = ((usize, usize), (usize, usize));

/// X wins outer square (0,0) on the diagonal through (2,0), (1,1) and (0,2).
pub const X_WINS_TOP_LEFT: [Step; 5] = [
    ((0, 0), (1, 1)),
    ((1, 1), (0, 0)),
    ((0, 0), (2, 0)),
    ((2, 0), (0, 0)),
    ((0, 0), (0, 2)),
];

/// X wins the game on the middle row of outer squares.
pub const X_WINS_GAME: [Step; 29] = [
    ((0, 1), (1, 0)),
    ((1, 0), (0, 0)),
    ((0, 0), (2, 0)),
    ((2, 0), (1, 1)),
    ((1, 1), (1, 2)),
    ((1, 2), (2, 1)),
    ((2, 1), (1, 1)),
    ((1, 1), (0, 1)),
    ((0, 1), (2, 0)),
    ((2, 0), (2, 2)),
    ((2, 2), (2, 2)),
    ((2, 2), (1, 0)),
    ((1, 0), (1, 0)),
    ((1, 0), (0, 1)),
    ((0, 1), (0, 0)),
    ((0, 0), (0, 1)),
    ((1, 1), (1, 1)),
    ((1, 1), (2, 1)),
    ((2, 1), (2, 1)),
    ((2, 1), (0, 0)),
    ((0, 0), (0, 0)),
    ((0, 0), (2, 2)),
    ((2, 2), (0, 2)),
    ((0, 2), (1, 1)),
    ((1, 1), (1, 0)),
    ((1, 0), (1, 1)),
    ((1, 0), (1, 2)),
    ((1, 2), (0, 1)),
    ((2, 1), (0, 1)),
];

/// Every outer square is won, but no line of them belongs to one player.
pub const DRAWN_GAME: [Step; 44] = [
    ((1, 0), (2, 0)),
    ((2, 0), (2, 1)),
    ((2, 1), (0, 1)),
    ((0, 1), (0, 0)),
    ((0, 0), (1, 1)),
    ((1, 1), (2, 0)),
    ((2, 0), (2, 2)),
    ((2, 2), (0, 0)),
    ((0, 0), (1, 2)),
    ((1, 2), (0, 2)),
    ((0, 2), (2, 2)),
    ((2, 2), (2, 2)),
    ((2, 2), (1, 2)),
    ((1, 2), (0, 0)),
    ((0, 0), (0, 1)),
    ((0, 1), (1, 1)),
    ((1, 1), (1, 0)),
    ((1, 0), (0, 2)),
    ((0, 2), (1, 2)),
    ((1, 2), (2, 2)),
    ((2, 2), (1, 0)),
    ((1, 0), (0, 0)),
    ((0, 0), (2, 2)),
    ((2, 2), (1, 1)),
    ((1, 1), (2, 2)),
    ((1, 2), (1, 2)),
    ((1, 1), (1, 2)),
    ((0, 1), (2, 2)),
    ((1, 0), (1, 0)),
    ((1, 0), (0, 1)),
    ((0, 2), (0, 2)),
    ((2, 0), (2, 0)),
    ((2, 0), (0, 1)),
    ((0, 0), (2, 1)),
    ((2, 1), (2, 2)),
    ((2, 0), (1, 0)),
    ((2, 1), (0, 0)),
    ((0, 0), (1, 0)),
    ((2, 1), (0, 2)),
    ((1, 1), (0, 1)),
    ((1, 1), (1, 1)),
    ((0, 0), (0, 0)),
    ((0, 0), (0, 2)),
    ((2, 0), (0, 0)),
];

/// Builds a cell coordinate from raw components.
pub fn at(outer: (usize, usize), inner: (usize, usize)) -> CellCoord {
    CellCoord::from_xy(outer, inner).expect("in range")
}

/// Starts a board and clicks through `steps`, each of which must be legal.
pub fn board_after(steps: &[Step]) -> MoveDispatcher<Rules> {
    let mut board = MoveDispatcher::started(Rules::new()).expect("start");
    for (outer, inner) in steps {
        let outcome = board.attempt_move(at(*outer, *inner)).expect("no error");
        assert!(
            matches!(outcome, Dispatch::Applied(_)),
            "step {:?}/{:?} should be legal",
            outer,
            inner
        );
    }
    board
}
