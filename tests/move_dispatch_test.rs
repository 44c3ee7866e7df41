//! Tests for dispatching clicks against the held game state.

mod common;

use common::{DRAWN_GAME, X_WINS_GAME, X_WINS_TOP_LEFT, at, board_after};
use strictly_uttt::{
    CellCoord, Completion, Dispatch, GameState, GameStatus, Move, MoveDispatcher, Phase, Player,
    Rules,
};

#[test]
fn test_phases_through_a_won_game() {
    let mut board = MoveDispatcher::new(Rules::new());
    assert_eq!(board.phase(), Phase::NotStarted);
    assert!(board.projection().is_none());

    board.start().expect("start");
    assert_eq!(board.phase(), Phase::InProgress);

    for (i, (outer, inner)) in X_WINS_GAME.iter().enumerate() {
        assert_eq!(board.phase(), Phase::InProgress, "before step {}", i);
        board.attempt_move(at(*outer, *inner)).expect("no error");
    }
    assert_eq!(board.phase(), Phase::Decided);
}

#[test]
fn test_start_is_idempotent() {
    let mut board = board_after(&X_WINS_TOP_LEFT);
    let before = board.state().cloned();
    board.start().expect("already started");
    assert_eq!(board.state().cloned(), before);
}

#[test]
fn test_applied_move_comes_from_index() {
    let mut board = board_after(&[]);
    let coord = at((2, 1), (0, 2));
    let expected = board.moves().and_then(|m| m.get(coord)).copied();
    let outcome = board.attempt_move(coord).expect("no error");
    assert_eq!(Some(outcome), expected.map(Dispatch::Applied));
    assert_eq!(outcome, Dispatch::Applied(Move::new(Player::X, coord)));
}

#[test]
fn test_illegal_clicks_leave_state_untouched() {
    let mut board = board_after(&X_WINS_TOP_LEFT);
    let before = board.state().cloned();

    // Occupied, inside a completed square, outside the forced square
    for coord in [at((0, 0), (1, 1)), at((0, 0), (2, 2)), at((2, 2), (2, 2))] {
        assert_eq!(board.attempt_move(coord).expect("no error"), Dispatch::Ignored);
        assert_eq!(board.state().cloned(), before);
    }
}

#[test]
fn test_decided_board_is_inert() {
    let mut board = board_after(&X_WINS_GAME);
    let before = board.state().cloned();

    for coord in CellCoord::all() {
        assert_eq!(board.attempt_move(coord).expect("no error"), Dispatch::Ignored);
    }
    assert_eq!(board.state().cloned(), before);
    assert_eq!(board.phase(), Phase::Decided);
}

#[test]
fn test_drawn_game_is_decided() {
    let board = board_after(&DRAWN_GAME);
    let state = board.state().expect("started");
    assert_eq!(state.status(), GameStatus::Draw);
    assert_eq!(state.winning_triple(), None);
    assert!(state.squares().iter().all(|s| s.completion().is_complete()));
    assert_eq!(board.phase(), Phase::Decided);

    let projection = board.projection().expect("started");
    assert!(!projection.is_interactive());
    assert!(projection.squares.iter().all(|s| !s.emphasized));
    assert!(
        projection
            .squares
            .iter()
            .all(|s| matches!(s.completion, Completion::Won(_)))
    );
}

#[test]
fn test_restart_after_decision() {
    let mut board = board_after(&X_WINS_GAME);
    board.restart().expect("restart");
    assert_eq!(board.phase(), Phase::InProgress);
    assert_eq!(board.state(), Some(&GameState::new()));
    assert_eq!(board.moves().map(|m| m.len()), Some(81));
}

#[test]
fn test_resume_from_saved_state() {
    let board = board_after(&X_WINS_GAME[..10]);
    let json = serde_json::to_string(board.state().expect("started")).expect("serialize");

    let saved: GameState = serde_json::from_str(&json).expect("deserialize");
    let mut resumed = MoveDispatcher::with_state(Rules::new(), saved).expect("consistent");
    assert_eq!(resumed.state(), board.state());
    assert_eq!(resumed.moves(), board.moves());

    let (outer, inner) = X_WINS_GAME[10];
    assert!(matches!(
        resumed.attempt_move(at(outer, inner)).expect("no error"),
        Dispatch::Applied(_)
    ));
}

#[test]
fn test_bad_winning_triple_rejected_on_load() {
    let board = board_after(&X_WINS_GAME);
    let mut json = serde_json::to_value(board.state().expect("started")).expect("serialize");
    json["winning_triple"] = serde_json::json!(["TopLeft", "Center", "BottomCenter"]);
    assert!(serde_json::from_value::<GameState>(json).is_err());
}

#[test]
fn test_inconsistent_squares_rejected_on_load() {
    let fresh = serde_json::to_value(GameState::new()).expect("serialize");

    // A local line on a square still open
    let mut json = fresh.clone();
    json["squares"][4]["winning_triple"] = serde_json::json!(["TopLeft", "TopCenter", "TopRight"]);
    assert!(serde_json::from_value::<GameState>(json).is_err());

    // A win claimed on a square without marks
    let mut json = fresh.clone();
    json["squares"][0]["completion"] = serde_json::json!({"Won": "O"});
    assert!(serde_json::from_value::<GameState>(json).is_err());

    // A game result the squares do not support
    let mut json = fresh;
    json["status"] = serde_json::json!({"Won": "X"});
    json["winning_triple"] = serde_json::json!(["TopLeft", "TopCenter", "TopRight"]);
    assert!(serde_json::from_value::<GameState>(json).is_err());
}

#[test]
fn test_saved_won_square_loads_with_its_line() {
    let board = board_after(&X_WINS_TOP_LEFT);
    let json = serde_json::to_value(board.state().expect("started")).expect("serialize");
    let saved: GameState = serde_json::from_value(json.clone()).expect("consistent");
    assert_eq!(Some(&saved), board.state());

    // Moving the recorded line off the marked cells is caught
    let mut json = json;
    json["squares"][0]["winning_triple"] = serde_json::json!(["TopLeft", "TopCenter", "TopRight"]);
    assert!(serde_json::from_value::<GameState>(json).is_err());
}
