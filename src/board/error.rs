//! Board layer error types.

use super::key::CoordinateKey;
use crate::games::uttt::MoveError;
use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong in the board layer.
///
/// Every kind is fatal: it means the engine broke its contract and the
/// board can no longer be rendered safely. Clicks on illegal cells are not
/// errors at all.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardErrorKind {
    /// The engine listed two moves for the same cell.
    #[display("Duplicate legal move for {}", _0)]
    DuplicateMove(CoordinateKey),

    /// The indexed moves disagree with the game state.
    #[display("Contract violation: {}", _0)]
    ContractViolation(String),

    /// The engine rejected a move it listed as legal.
    #[display("Engine rejected a listed move: {}", _0)]
    Engine(MoveError),
}

/// Board error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Board error: {} at {}:{}", kind, file, line)]
pub struct BoardError {
    /// Error kind.
    pub kind: BoardErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BoardError {
    /// Creates a new board error with caller location tracking.
    #[track_caller]
    #[instrument(level = "debug")]
    pub fn new(kind: BoardErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<MoveError> for BoardError {
    #[track_caller]
    fn from(err: MoveError) -> Self {
        Self::new(BoardErrorKind::Engine(err))
    }
}
