//! The board layer: turning game states into something a view can draw
//! and turning clicks back into engine moves.
//!
//! - [`CoordinateKey`] identifies squares and cells by value.
//! - [`MoveMap`] indexes the engine's legal moves by cell.
//! - [`project`] builds a [`BoardProjection`] from a state and its index.
//! - [`MoveDispatcher`] owns the state and applies clicked moves.

mod dispatcher;
mod error;
mod index;
pub mod invariants;
mod key;
mod projector;

pub use dispatcher::{Dispatch, MoveDispatcher, Phase};
pub use error::{BoardError, BoardErrorKind};
pub use index::MoveMap;
pub use key::CoordinateKey;
pub use projector::{BoardProjection, CellProjection, SquareProjection, project};
