//! Terminal board for ultimate tic-tac-toe.

mod app;
mod cursor;
mod layout;
mod theme;
mod ui;

pub use app::{App, Flow};
pub use cursor::{Cursor, Direction};
pub use layout::BoardLayout;
pub use theme::Palette;

use crate::config::BoardConfig;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, error, info, instrument};

/// Runs the interactive board until the player quits.
///
/// The terminal is restored even when the game loop fails.
#[instrument(skip(config), fields(theme = %config.theme(), mouse = config.mouse()))]
pub fn run(config: &BoardConfig) -> Result<()> {
    info!("Starting terminal board");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    if *config.mouse() {
        execute!(stdout, EnableMouseCapture).context("Failed to capture mouse")?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let result = run_loop(&mut terminal, config);

    let restored = restore(&mut terminal, *config.mouse());

    if let Err(e) = &result {
        error!(error = %e, "Terminal board failed");
    }
    info!("Terminal board closed");
    result.and(restored)
}

/// Runs every restore step, reporting the first failure.
fn restore(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mouse: bool) -> Result<()> {
    let mut steps = vec![disable_raw_mode().context("Failed to disable raw mode")];
    if mouse {
        steps.push(
            execute!(terminal.backend_mut(), DisableMouseCapture)
                .context("Failed to release mouse"),
        );
    }
    steps.push(
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen"),
    );
    steps.push(terminal.show_cursor().context("Failed to show cursor"));
    first_error(steps)
}

/// Logs every failed step and returns the first one.
fn first_error(steps: Vec<Result<()>>) -> Result<()> {
    let mut first = None;
    for e in steps.into_iter().filter_map(Result::err) {
        error!(error = %e, "Terminal restore step failed");
        first.get_or_insert(e);
    }
    match first {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &BoardConfig,
) -> Result<()> {
    let palette = Palette::new(*config.theme());
    let mut app = App::new()?;

    loop {
        terminal.draw(|frame| {
            let layout = ui::draw(frame, &app, &palette);
            app.set_layout(layout);
        })?;

        let flow = match event::read().context("Failed to read terminal event")? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key.code)?,
            Event::Mouse(mouse) => app.handle_mouse(mouse)?,
            Event::Resize(width, height) => {
                debug!(width, height, "Terminal resized");
                Flow::Continue
            }
            _ => Flow::Continue,
        };

        if flow == Flow::Quit {
            return Ok(());
        }
    }
}
