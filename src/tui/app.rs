//! Application state and input handling.

use super::cursor::{Cursor, Direction};
use super::layout::BoardLayout;
use crate::board::{BoardError, BoardErrorKind, BoardProjection, Dispatch, MoveDispatcher};
use crate::games::uttt::{CellCoord, GameStatus, Rules};
use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use tracing::{debug, info, instrument};

/// What the event loop should do after an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep running.
    Continue,
    /// Leave the board.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    board: MoveDispatcher<Rules>,
    projection: BoardProjection,
    cursor: Cursor,
    layout: Option<BoardLayout>,
    message: Option<String>,
}

impl App {
    /// Starts a fresh game.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] when the rules produce an inconsistent board.
    pub fn new() -> Result<Self, BoardError> {
        Self::with_board(MoveDispatcher::started(Rules::new())?)
    }

    /// Wraps an already started board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] when the board is not started yet and cannot be.
    pub fn with_board(mut board: MoveDispatcher<Rules>) -> Result<Self, BoardError> {
        board.start()?;
        let projection = Self::project(&board)?;
        let cursor = Cursor::default().snap(&projection);
        Ok(Self {
            board,
            projection,
            cursor,
            layout: None,
            message: None,
        })
    }

    fn project(board: &MoveDispatcher<Rules>) -> Result<BoardProjection, BoardError> {
        board.projection().ok_or_else(|| {
            BoardError::new(BoardErrorKind::ContractViolation(
                "board has no state after start".to_string(),
            ))
        })
    }

    /// The projection to draw.
    pub fn projection(&self) -> &BoardProjection {
        &self.projection
    }

    /// The cell under the keyboard cursor.
    pub fn cursor(&self) -> CellCoord {
        self.cursor.coord()
    }

    /// The one-off message shown under the status, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Records where the board was drawn, for mouse hit-testing.
    pub fn set_layout(&mut self, layout: Option<BoardLayout>) {
        self.layout = layout;
    }

    /// The status line text.
    pub fn status_line(&self) -> String {
        let projection = &self.projection;
        match projection.status {
            GameStatus::InProgress if projection.free_choice => {
                format!("{} to move, any open square", projection.turn)
            }
            GameStatus::InProgress => format!("{} to move", projection.turn),
            GameStatus::Won(winner) => format!("{} wins! Press 'r' to restart or 'q' to quit.", winner),
            GameStatus::Draw => "Draw! Press 'r' to restart or 'q' to quit.".to_string(),
        }
    }

    /// Handles a key press.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] when the engine breaks its contract.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Result<Flow, BoardError> {
        let direction = match key {
            KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => Some(Direction::Up),
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => Some(Direction::Down),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => Some(Direction::Left),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => Some(Direction::Right),
            _ => None,
        };
        if let Some(direction) = direction {
            self.cursor = self.cursor.step(direction, &self.projection);
            return Ok(Flow::Continue);
        }

        match key {
            KeyCode::Char(' ') | KeyCode::Enter => {
                self.select(self.cursor.coord())?;
                Ok(Flow::Continue)
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.restart()?;
                Ok(Flow::Continue)
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                info!("Quit requested");
                Ok(Flow::Quit)
            }
            _ => Ok(Flow::Continue),
        }
    }

    /// Handles a mouse event. Only left clicks on cells do anything.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] when the engine breaks its contract.
    #[instrument(skip(self, event), fields(column = event.column, row = event.row))]
    pub fn handle_mouse(&mut self, event: MouseEvent) -> Result<Flow, BoardError> {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(Flow::Continue);
        }
        let Some(coord) = self
            .layout
            .and_then(|layout| layout.hit(event.column, event.row))
        else {
            debug!("Click outside the cells");
            return Ok(Flow::Continue);
        };
        if self.projection.cell(coord).clickable {
            self.cursor = Cursor::at(coord);
        }
        self.select(coord)?;
        Ok(Flow::Continue)
    }

    /// Attempts the move at `coord` and refreshes the projection.
    fn select(&mut self, coord: CellCoord) -> Result<(), BoardError> {
        match self.board.attempt_move(coord)? {
            Dispatch::Applied(mov) => {
                self.projection = Self::project(&self.board)?;
                self.cursor = self.cursor.snap(&self.projection);
                self.message = Some(format!("{} played {}", mov.player, coord));
            }
            Dispatch::Ignored => {
                self.message = Some(format!("{} is not playable", coord));
            }
        }
        Ok(())
    }

    /// Throws the game away and starts over.
    fn restart(&mut self) -> Result<(), BoardError> {
        self.board.restart()?;
        self.projection = Self::project(&self.board)?;
        self.cursor = Cursor::default().snap(&self.projection);
        self.message = Some("Game restarted".to_string());
        Ok(())
    }
}
