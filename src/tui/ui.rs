//! Stateless rendering of the board projection.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::Paragraph,
};

use super::app::App;
use super::layout::{
    BIG_DRAW, BIG_O, BIG_X, BOARD_HEIGHT, BOARD_WIDTH, BoardLayout, GAP_X, GAP_Y, GRID, Glyph,
    SQUARE_HEIGHT, SQUARE_WIDTH,
};
use super::theme::Palette;
use crate::board::SquareProjection;
use crate::games::uttt::{Cell, Completion, Player};

const HINTS: &str = "arrows/hjkl/wasd: move | space/enter: play | r: restart | q: quit";

/// Draws the whole screen and returns where the board ended up.
pub fn draw(frame: &mut Frame, app: &App, palette: &Palette) -> Option<BoardLayout> {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(BOARD_HEIGHT), // Board
            Constraint::Length(1),         // Status
            Constraint::Length(1),         // Last action
            Constraint::Length(1),         // Hints
        ])
        .split(frame.area());

    let layout = BoardLayout::centered(chunks[0]);
    match layout {
        Some(layout) => draw_board(frame, layout, app, palette),
        None => {
            let warning = Paragraph::new(format!(
                "Terminal too small: need {}x{}",
                BOARD_WIDTH,
                BOARD_HEIGHT + 3
            ))
            .alignment(Alignment::Center);
            frame.render_widget(warning, chunks[0]);
        }
    }

    let projection = app.projection();
    let status = Paragraph::new(app.status_line())
        .style(palette.status(projection.status, projection.turn))
        .alignment(Alignment::Center);
    frame.render_widget(status, chunks[1]);

    if let Some(message) = app.message() {
        let message = Paragraph::new(message)
            .style(palette.hint())
            .alignment(Alignment::Center);
        frame.render_widget(message, chunks[2]);
    }

    let hints = Paragraph::new(HINTS)
        .style(palette.hint())
        .alignment(Alignment::Center);
    frame.render_widget(hints, chunks[3]);

    layout
}

fn draw_board(frame: &mut Frame, layout: BoardLayout, app: &App, palette: &Palette) {
    draw_frame(frame, layout.area(), palette);
    for square in &app.projection().squares {
        draw_square(frame, layout, square, app, palette);
    }
}

fn draw_frame(frame: &mut Frame, area: Rect, palette: &Palette) {
    let bar = "█".repeat(BOARD_WIDTH as usize);
    for i in 1..3 {
        let y = area.y + i * (SQUARE_HEIGHT + GAP_Y) - GAP_Y;
        let row = Paragraph::new(bar.as_str()).style(palette.frame());
        frame.render_widget(row, Rect::new(area.x, y, BOARD_WIDTH, GAP_Y));

        let x = area.x + i * (SQUARE_WIDTH + GAP_X) - GAP_X;
        let lines: Vec<Line> = (0..BOARD_HEIGHT).map(|_| Line::from("██")).collect();
        let column = Paragraph::new(lines).style(palette.frame());
        frame.render_widget(column, Rect::new(x, area.y, GAP_X, BOARD_HEIGHT));
    }
}

fn draw_square(
    frame: &mut Frame,
    layout: BoardLayout,
    square: &SquareProjection,
    app: &App,
    palette: &Palette,
) {
    let area = layout.square(square.position);
    let grid_style = palette.grid(square.active);

    let grid: Vec<Line> = GRID.iter().map(|row| Line::from(*row)).collect();
    frame.render_widget(Paragraph::new(grid).style(grid_style), area);

    let turn = app.projection().turn;
    for cell in &square.cells {
        let (text, mut style) = match cell.occupancy {
            Cell::Empty => ("   ".to_string(), grid_style),
            Cell::Occupied(player) => (
                format!(" {} ", player),
                grid_style.patch(palette.mark(player, cell.emphasized)),
            ),
        };
        if cell.clickable && cell.coord == app.cursor() {
            style = style.patch(palette.cursor(turn));
        }
        frame.render_widget(Paragraph::new(text).style(style), layout.cell(cell.coord));
    }

    if let Some(tint) = palette.overlay(square.completion, square.emphasized) {
        let glyph = overlay_glyph(square.completion);
        let buffer = frame.buffer_mut();
        for (dy, row) in glyph.iter().enumerate() {
            for (dx, ch) in row.chars().enumerate() {
                if ch == '█' {
                    buffer[(area.x + dx as u16, area.y + dy as u16)].set_style(tint);
                }
            }
        }
    }
}

fn overlay_glyph(completion: Completion) -> &'static Glyph {
    match completion.winner() {
        Some(Player::X) => &BIG_X,
        Some(Player::O) => &BIG_O,
        None => &BIG_DRAW,
    }
}
