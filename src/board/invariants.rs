//! First-class invariants linking a game state to its move index.
//!
//! The engine owns the rules, but the board relies on a few properties of
//! the moves it lists. They are checked every time the index is rebuilt;
//! a violation means the engine broke its contract.

use super::index::MoveMap;
use crate::games::uttt::{ActiveSquare, GameState};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3, I4> InvariantSet<S> for (I1, I2, I3, I4)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if !I4::holds(state) {
            violations.push(InvariantViolation::new(I4::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// A game state together with the index built from its legal moves.
#[derive(Debug, Clone, Copy)]
pub struct Indexed<'a> {
    /// The game state.
    pub state: &'a GameState,
    /// Its move index.
    pub moves: &'a MoveMap,
}

/// Invariant: occupied cells are never legal targets.
pub struct OccupiedNeverIndexed;

impl Invariant<Indexed<'_>> for OccupiedNeverIndexed {
    fn holds(indexed: &Indexed<'_>) -> bool {
        indexed
            .moves
            .moves()
            .all(|mov| indexed.state.cell(mov.coord()).is_empty())
    }

    fn description() -> &'static str {
        "Occupied cells are never legal targets"
    }
}

/// Invariant: with a forced square, every move targets that square.
pub struct ActiveSquareExclusive;

impl Invariant<Indexed<'_>> for ActiveSquareExclusive {
    fn holds(indexed: &Indexed<'_>) -> bool {
        match indexed.state.active() {
            ActiveSquare::Free => true,
            ActiveSquare::Forced(active) => indexed.moves.keys().all(|key| key.outer() == active),
        }
    }

    fn description() -> &'static str {
        "Every legal move targets the active square"
    }
}

/// Invariant: completed outer squares receive no moves.
pub struct CompletedSquaresClosed;

impl Invariant<Indexed<'_>> for CompletedSquaresClosed {
    fn holds(indexed: &Indexed<'_>) -> bool {
        indexed
            .moves
            .keys()
            .all(|key| !indexed.state.square(key.outer()).completion().is_complete())
    }

    fn description() -> &'static str {
        "Completed squares receive no moves"
    }
}

/// Invariant: a decided game has no legal moves.
pub struct DecidedBoardInert;

impl Invariant<Indexed<'_>> for DecidedBoardInert {
    fn holds(indexed: &Indexed<'_>) -> bool {
        !indexed.state.status().is_over() || indexed.moves.is_empty()
    }

    fn description() -> &'static str {
        "A decided game has no legal moves"
    }
}

/// All board invariants as a composable set.
pub type BoardInvariants = (
    OccupiedNeverIndexed,
    ActiveSquareExclusive,
    CompletedSquaresClosed,
    DecidedBoardInert,
);
