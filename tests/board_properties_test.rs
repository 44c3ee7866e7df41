//! Property-based tests over random legal game prefixes.
//!
//! Each case plays a random sequence of clicks through the dispatcher,
//! picking among the engine's legal moves, and checks the board after
//! every step.

use proptest::prelude::*;
use std::collections::HashSet;
use strictly_uttt::{
    ActiveSquare, CellCoord, CoordinateKey, Dispatch, Engine, GameState, MoveDispatcher, Phase,
    Rules, project,
};

// =============================================================================
// Strategies for generating test inputs
// =============================================================================

/// Choices used to pick a legal move at each step, reduced modulo the
/// number of legal moves. Long enough to finish most games.
fn arb_choices() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(any::<usize>(), 0..90)
}

/// Plays the choices, calling `check` on the board after every step.
fn play<F>(choices: &[usize], mut check: F) -> Result<MoveDispatcher<Rules>, TestCaseError>
where
    F: FnMut(&MoveDispatcher<Rules>) -> Result<(), TestCaseError>,
{
    let mut board = MoveDispatcher::started(Rules::new())
        .map_err(|e| TestCaseError::fail(e.to_string()))?;
    check(&board)?;

    for choice in choices {
        let Some(state) = board.state() else {
            return Err(TestCaseError::fail("board lost its state"));
        };
        let legal = board.engine().legal_moves(state);
        if legal.is_empty() {
            break;
        }
        let coord = legal[choice % legal.len()].coord();
        let outcome = board
            .attempt_move(coord)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert!(matches!(outcome, Dispatch::Applied(_)));
        check(&board)?;
    }
    Ok(board)
}

proptest! {
    /// Every legal move has exactly one entry and nothing else is indexed.
    #[test]
    fn prop_index_complete(choices in arb_choices()) {
        play(&choices, |board| {
            let state = board.state().expect("started");
            let moves = board.moves().expect("started");
            let legal = board.engine().legal_moves(state);

            prop_assert_eq!(moves.len(), legal.len());
            for mov in &legal {
                prop_assert_eq!(moves.get(mov.coord()), Some(mov));
            }
            let legal_keys: HashSet<_> = legal.iter().map(|m| CoordinateKey::from(m.coord())).collect();
            prop_assert!(moves.keys().all(|k| legal_keys.contains(k)));
            Ok(())
        })?;
    }

    /// Marked cells are never clickable.
    #[test]
    fn prop_occupied_never_clickable(choices in arb_choices()) {
        play(&choices, |board| {
            let projection = board.projection().expect("started");
            for cell in projection.cells() {
                prop_assert!(!(cell.clickable && !cell.occupancy.is_empty()));
            }
            Ok(())
        })?;
    }

    /// With a forced square, only its open cells are clickable.
    #[test]
    fn prop_active_square_exclusive(choices in arb_choices()) {
        play(&choices, |board| {
            let state = board.state().expect("started");
            let projection = board.projection().expect("started");
            if let ActiveSquare::Forced(active) = state.active() {
                prop_assert!(board.moves().expect("started").keys().all(|k| k.outer() == active));
                for square in &projection.squares {
                    prop_assert_eq!(square.active, square.position == active);
                    if square.position != active {
                        prop_assert!(square.cells.iter().all(|c| !c.clickable));
                    }
                }
            } else {
                prop_assert!(projection.squares.iter().all(|s| !s.active));
            }
            Ok(())
        })?;
    }

    /// Completed squares take no more moves.
    #[test]
    fn prop_completed_squares_closed(choices in arb_choices()) {
        play(&choices, |board| {
            let projection = board.projection().expect("started");
            for square in projection.squares.iter().filter(|s| s.completion.is_complete()) {
                prop_assert!(square.cells.iter().all(|c| !c.clickable));
            }
            Ok(())
        })?;
    }

    /// Once decided, no click changes anything.
    #[test]
    fn prop_decided_board_inert(choices in arb_choices()) {
        let mut board = play(&choices, |_| Ok(()))?;
        if board.phase() != Phase::Decided {
            return Ok(());
        }
        let before = board.state().cloned();
        prop_assert!(board.moves().expect("started").is_empty());
        for coord in CellCoord::all() {
            let outcome = board
                .attempt_move(coord)
                .map_err(|e| TestCaseError::fail(e.to_string()))?;
            prop_assert_eq!(outcome, Dispatch::Ignored);
        }
        prop_assert_eq!(board.state().cloned(), before);
    }

    /// Projecting twice gives equal trees.
    #[test]
    fn prop_projection_idempotent(choices in arb_choices()) {
        play(&choices, |board| {
            let state = board.state().expect("started");
            let moves = board.moves().expect("started");
            prop_assert_eq!(project(state, moves), project(state, moves));
            Ok(())
        })?;
    }

    /// Cells emphasized inside a square are exactly its winning line.
    #[test]
    fn prop_emphasis_matches_triples(choices in arb_choices()) {
        play(&choices, |board| {
            let state = board.state().expect("started");
            let projection = board.projection().expect("started");
            for square in &projection.squares {
                let triple = state.square(square.position).winning_triple();
                for cell in &square.cells {
                    prop_assert_eq!(
                        cell.emphasized,
                        triple.is_some_and(|t| t.contains(cell.coord.inner))
                    );
                }
            }
            Ok(())
        })?;
    }

    /// Every reachable state survives a JSON save and load.
    #[test]
    fn prop_reachable_states_reload(choices in arb_choices()) {
        play(&choices, |board| {
            let state = board.state().expect("started");
            let json = serde_json::to_string(state).map_err(|e| TestCaseError::fail(e.to_string()))?;
            let loaded: GameState =
                serde_json::from_str(&json).map_err(|e| TestCaseError::fail(e.to_string()))?;
            prop_assert_eq!(&loaded, state);
            Ok(())
        })?;
    }
}
