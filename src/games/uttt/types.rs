//! Core domain types for ultimate tic-tac-toe.

use super::position::{CellCoord, Position};
use super::rules::win::LINES;
use super::rules::{Outcome, evaluate};
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, derive_more::Display,
)]
pub enum Player {
    /// Player X (goes first).
    #[default]
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell inside an outer square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell marked by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the player occupying this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Three positions forming a completed line on a 3x3 grid.
///
/// Only the eight rows, columns and diagonals are accepted, both at
/// construction and when deserializing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[Position; 3]", into = "[Position; 3]")]
pub struct WinningTriple([Position; 3]);

impl WinningTriple {
    /// Creates a triple, `None` unless the positions form one of the eight lines.
    ///
    /// Order does not matter; the stored order is the canonical line order.
    pub fn new(positions: [Position; 3]) -> Option<Self> {
        LINES
            .iter()
            .find(|line| line.iter().all(|p| positions.contains(p)))
            .map(|line| Self(*line))
    }

    /// The three positions of the line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Checks if the line passes through `pos`.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

impl TryFrom<[Position; 3]> for WinningTriple {
    type Error = String;

    fn try_from(positions: [Position; 3]) -> Result<Self, Self::Error> {
        Self::new(positions).ok_or_else(|| format!("{:?} is not a line", positions))
    }
}

impl From<WinningTriple> for [Position; 3] {
    fn from(triple: WinningTriple) -> Self {
        triple.0
    }
}

/// Completion status of an outer square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Completion {
    /// Still open for play.
    #[default]
    Open,
    /// Won by a player.
    Won(Player),
    /// Filled without a line.
    Drawn,
}

impl Completion {
    /// Checks if the square is finished (won or drawn).
    pub fn is_complete(self) -> bool {
        self != Completion::Open
    }

    /// Returns the winner, if the square was won.
    pub fn winner(self) -> Option<Player> {
        match self {
            Completion::Won(player) => Some(player),
            _ => None,
        }
    }
}

/// One of the nine top-level squares, holding its own 3x3 grid of cells.
///
/// Deserializing checks the recorded completion and line against the cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(try_from = "SquareFields")]
pub struct OuterSquare {
    /// Cells in row-major order.
    cells: [Cell; 9],
    /// Completion status.
    completion: Completion,
    /// Line that won this square, present only when won.
    winning_triple: Option<WinningTriple>,
}

impl OuterSquare {
    /// Creates a new empty outer square.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given position.
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns the completion status.
    pub fn completion(&self) -> Completion {
        self.completion
    }

    /// Returns the winning line, if the square was won.
    pub fn winning_triple(&self) -> Option<WinningTriple> {
        self.winning_triple
    }

    /// Sets a cell (unchecked - the engine validates moves).
    pub(super) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }

    /// Records the completion of this square.
    pub(super) fn complete(&mut self, completion: Completion, triple: Option<WinningTriple>) {
        self.completion = completion;
        self.winning_triple = triple;
    }
}

#[derive(Deserialize)]
struct SquareFields {
    cells: [Cell; 9],
    completion: Completion,
    winning_triple: Option<WinningTriple>,
}

impl TryFrom<SquareFields> for OuterSquare {
    type Error = String;

    fn try_from(fields: SquareFields) -> Result<Self, Self::Error> {
        let mut square = Self {
            cells: fields.cells,
            ..Self::default()
        };
        let (completion, triple) = match evaluate(&square) {
            Outcome::Won(player, triple) => (Completion::Won(player), Some(triple)),
            Outcome::Full => (Completion::Drawn, None),
            Outcome::Open => (Completion::Open, None),
        };
        if (fields.completion, fields.winning_triple) != (completion, triple) {
            return Err(format!(
                "square recorded as {:?} with line {:?}, but its cells give {:?} with line {:?}",
                fields.completion, fields.winning_triple, completion, triple
            ));
        }
        square.complete(completion, triple);
        Ok(square)
    }
}

/// Where the player to move is allowed to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ActiveSquare {
    /// Any open outer square.
    #[default]
    Free,
    /// Only the given outer square.
    Forced(Position),
}

impl ActiveSquare {
    /// Checks if `pos` is the forced square. Always false when free.
    pub fn is(self, pos: Position) -> bool {
        self == ActiveSquare::Forced(pos)
    }

    /// Returns the forced square, if any.
    pub fn forced(self) -> Option<Position> {
        match self {
            ActiveSquare::Free => None,
            ActiveSquare::Forced(pos) => Some(pos),
        }
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GameStatus {
    /// Game is ongoing.
    #[default]
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true if the game is over.
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "Player {} wins", player),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

/// Complete game state.
///
/// Values are never mutated once handed out by the engine; every move
/// produces a new state. Deserializing rejects states no sequence of
/// moves could reach from the square results, mark counts or active square.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(try_from = "StateFields")]
pub struct GameState {
    /// Outer squares in row-major order.
    squares: [OuterSquare; 9],
    /// Constraint on the next move.
    active: ActiveSquare,
    /// Player to move.
    turn: Player,
    /// Overall status.
    status: GameStatus,
    /// Line of outer squares that won the game.
    winning_triple: Option<WinningTriple>,
}

impl GameState {
    /// Creates the starting state: empty board, X to move, free choice.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the outer square at the given position.
    pub fn square(&self, pos: Position) -> &OuterSquare {
        &self.squares[pos.to_index()]
    }

    /// Returns all outer squares in row-major order.
    pub fn squares(&self) -> &[OuterSquare; 9] {
        &self.squares
    }

    /// Gets the cell at the given coordinate.
    pub fn cell(&self, coord: CellCoord) -> Cell {
        self.square(coord.outer).cell(coord.inner)
    }

    /// Returns the active-square constraint.
    pub fn active(&self) -> ActiveSquare {
        self.active
    }

    /// Returns the player to move.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the line of outer squares that won the game.
    pub fn winning_triple(&self) -> Option<WinningTriple> {
        self.winning_triple
    }

    pub(super) fn square_mut(&mut self, pos: Position) -> &mut OuterSquare {
        &mut self.squares[pos.to_index()]
    }

    pub(super) fn set_active(&mut self, active: ActiveSquare) {
        self.active = active;
    }

    pub(super) fn set_turn(&mut self, turn: Player) {
        self.turn = turn;
    }

    /// Sets the game status.
    pub(super) fn set_status(&mut self, status: GameStatus, triple: Option<WinningTriple>) {
        self.status = status;
        self.winning_triple = triple;
    }
}

#[derive(Deserialize)]
struct StateFields {
    squares: [OuterSquare; 9],
    active: ActiveSquare,
    turn: Player,
    status: GameStatus,
    winning_triple: Option<WinningTriple>,
}

impl TryFrom<StateFields> for GameState {
    type Error = String;

    fn try_from(fields: StateFields) -> Result<Self, Self::Error> {
        let state = Self {
            squares: fields.squares,
            active: fields.active,
            turn: fields.turn,
            status: fields.status,
            winning_triple: fields.winning_triple,
        };

        let (status, triple) = match evaluate(&state) {
            Outcome::Won(player, triple) => (GameStatus::Won(player), Some(triple)),
            Outcome::Full => (GameStatus::Draw, None),
            Outcome::Open => (GameStatus::InProgress, None),
        };
        if (state.status, state.winning_triple) != (status, triple) {
            return Err(format!(
                "game recorded as {:?} with line {:?}, but its squares give {:?} with line {:?}",
                state.status, state.winning_triple, status, triple
            ));
        }

        let marks = |player: Player| {
            state
                .squares
                .iter()
                .flat_map(|square| square.cells.iter())
                .filter(|cell| cell.player() == Some(player))
                .count()
        };
        let (x, o) = (marks(Player::X), marks(Player::O));
        let turn = if x == o {
            Player::X
        } else if x == o + 1 {
            Player::O
        } else {
            return Err(format!("{} X marks and {} O marks cannot alternate", x, o));
        };
        if state.turn != turn {
            return Err(format!("{} X marks and {} O marks put {} to move", x, o, turn));
        }

        if let ActiveSquare::Forced(pos) = state.active {
            if state.status.is_over() {
                return Err(format!("decided game still forces {}", pos));
            }
            if state.square(pos).completion.is_complete() {
                return Err(format!("forced square {} is already complete", pos));
            }
        }

        Ok(state)
    }
}
