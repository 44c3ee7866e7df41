//! Indexing the engine's legal moves by coordinate.

use super::error::{BoardError, BoardErrorKind};
use super::key::CoordinateKey;
use crate::games::uttt::{CellCoord, Move};
use std::collections::HashMap;
use tracing::{debug, instrument, warn};

/// Legal moves keyed by the cell they target.
///
/// Rebuilt from the engine's list on every state change and never edited
/// afterwards. An empty map means no interaction is possible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveMap {
    moves: HashMap<CoordinateKey, Move>,
}

impl MoveMap {
    /// Indexes a legal-move list.
    ///
    /// The moves are taken as legal; nothing here checks the rules.
    ///
    /// # Errors
    ///
    /// Returns [`BoardErrorKind::DuplicateMove`] when two moves target the
    /// same cell.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn build(moves: &[Move]) -> Result<Self, BoardError> {
        let mut index = HashMap::with_capacity(moves.len());
        for mov in moves {
            let key = CoordinateKey::from(mov.coord());
            if index.insert(key, *mov).is_some() {
                warn!(%key, "Engine listed the same cell twice");
                return Err(BoardError::new(BoardErrorKind::DuplicateMove(key)));
            }
        }
        debug!(indexed = index.len(), "Move index rebuilt");
        Ok(Self { moves: index })
    }

    /// Looks up the legal move for a cell.
    pub fn get(&self, coord: CellCoord) -> Option<&Move> {
        self.lookup(&CoordinateKey::from(coord))
    }

    /// Looks up the legal move for a key. Outer-square keys never match.
    pub fn lookup(&self, key: &CoordinateKey) -> Option<&Move> {
        self.moves.get(key)
    }

    /// Checks if the cell is a legal target.
    pub fn contains(&self, coord: CellCoord) -> bool {
        self.get(coord).is_some()
    }

    /// Number of indexed moves.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Checks if no move is possible.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Iterates over the indexed keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &CoordinateKey> {
        self.moves.keys()
    }

    /// Iterates over the indexed moves, in no particular order.
    pub fn moves(&self) -> impl Iterator<Item = &Move> {
        self.moves.values()
    }
}
