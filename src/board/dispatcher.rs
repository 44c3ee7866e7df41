//! Resolving clicks into moves and holding the current game state.

use super::error::{BoardError, BoardErrorKind};
use super::index::MoveMap;
use super::invariants::{BoardInvariants, Indexed, InvariantSet};
use super::projector::{BoardProjection, project};
use crate::games::uttt::{CellCoord, Engine, GameState, Move};
use tracing::{debug, info, instrument, warn};

/// Lifecycle of one board instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Phase {
    /// No state yet; the engine has not been asked to initialize.
    #[display("Not started")]
    NotStarted,
    /// Moves are possible.
    #[display("In progress")]
    InProgress,
    /// No legal move remains; clicks are ignored from here on.
    #[display("Decided")]
    Decided,
}

/// Outcome of a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The move was legal and the state has been replaced.
    Applied(Move),
    /// The cell is not a legal target; nothing changed.
    Ignored,
}

/// The held state together with its index. Replaced as a whole.
#[derive(Debug, Clone)]
struct Snapshot {
    state: GameState,
    moves: MoveMap,
}

impl Snapshot {
    /// Indexes the engine's legal moves for `state` and checks them against it.
    #[instrument(level = "debug", skip(engine, state))]
    fn index<E: Engine>(engine: &E, state: GameState) -> Result<Self, BoardError> {
        let moves = MoveMap::build(&engine.legal_moves(&state))?;

        BoardInvariants::check_all(&Indexed {
            state: &state,
            moves: &moves,
        })
        .map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Engine broke the move contract");
            BoardError::new(BoardErrorKind::ContractViolation(descriptions))
        })?;

        Ok(Self { state, moves })
    }
}

/// Owns the game state of one board and applies clicked moves to it.
///
/// This is the only place the held state changes, and it only ever
/// changes by full replacement. Dispatch takes `&mut self`, so every
/// click sees the state left by the previous one.
#[derive(Debug)]
pub struct MoveDispatcher<E> {
    engine: E,
    current: Option<Snapshot>,
}

impl<E: Engine> MoveDispatcher<E> {
    /// Creates a dispatcher that has not started a game yet.
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            current: None,
        }
    }

    /// Creates a dispatcher and starts a game.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] when the engine's starting state is inconsistent.
    pub fn started(engine: E) -> Result<Self, BoardError> {
        let mut dispatcher = Self::new(engine);
        dispatcher.start()?;
        Ok(dispatcher)
    }

    /// Creates a dispatcher holding a given state, such as one loaded from a file.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] when the engine's moves for `state` are inconsistent.
    pub fn with_state(engine: E, state: GameState) -> Result<Self, BoardError> {
        let current = Snapshot::index(&engine, state)?;
        Ok(Self {
            engine,
            current: Some(current),
        })
    }

    /// Asks the engine for a starting state. Does nothing once started.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] when the engine's starting state is inconsistent.
    #[instrument(skip(self))]
    pub fn start(&mut self) -> Result<(), BoardError> {
        if self.current.is_some() {
            debug!("Board already started");
            return Ok(());
        }
        self.current = Some(Snapshot::index(&self.engine, self.engine.initialize())?);
        info!(phase = %self.phase(), "Board started");
        Ok(())
    }

    /// Discards the current game and starts a fresh one.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] when the engine's starting state is inconsistent.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> Result<(), BoardError> {
        self.current = None;
        self.start()
    }

    /// Plays the move at `coord` if it is legal.
    ///
    /// Clicking a cell that is not a legal target (occupied, outside the
    /// active square, game decided, board not started) is a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] only when the engine breaks its contract:
    /// rejecting a move it listed, or producing a state whose moves are
    /// inconsistent. The held state is left untouched in that case.
    #[instrument(skip_all, fields(%coord))]
    pub fn attempt_move(&mut self, coord: CellCoord) -> Result<Dispatch, BoardError> {
        let Some(current) = &self.current else {
            debug!("Click before start ignored");
            return Ok(Dispatch::Ignored);
        };

        let Some(mov) = current.moves.get(coord).copied() else {
            debug!("Click on non-legal cell ignored");
            return Ok(Dispatch::Ignored);
        };

        let next = self.engine.apply_move(&current.state, mov)?;
        let snapshot = Snapshot::index(&self.engine, next)?;
        self.current = Some(snapshot);

        info!(%mov, phase = %self.phase(), "Move applied");
        Ok(Dispatch::Applied(mov))
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        match &self.current {
            None => Phase::NotStarted,
            Some(snapshot) if snapshot.moves.is_empty() => Phase::Decided,
            Some(_) => Phase::InProgress,
        }
    }

    /// The held game state, once started.
    pub fn state(&self) -> Option<&GameState> {
        self.current.as_ref().map(|s| &s.state)
    }

    /// The index of the held state's legal moves, once started.
    pub fn moves(&self) -> Option<&MoveMap> {
        self.current.as_ref().map(|s| &s.moves)
    }

    /// Projects the held state for rendering, once started.
    pub fn projection(&self) -> Option<BoardProjection> {
        self.current.as_ref().map(|s| project(&s.state, &s.moves))
    }

    /// The engine behind this board.
    pub fn engine(&self) -> &E {
        &self.engine
    }
}
