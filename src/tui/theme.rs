//! Mapping projection flags to terminal styles.

use crate::config::Theme;
use crate::games::uttt::{Completion, GameStatus, Player};
use ratatui::style::{Color, Modifier, Style};

/// Styles for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    theme: Theme,
}

impl Palette {
    /// Creates the palette for a theme.
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    fn player_color(player: Player, emphasized: bool) -> Color {
        match (player, emphasized) {
            (Player::X, false) => Color::LightRed,
            (Player::X, true) => Color::Red,
            (Player::O, false) => Color::LightBlue,
            (Player::O, true) => Color::Blue,
        }
    }

    /// Grid lines of an outer square.
    pub fn grid(&self, active: bool) -> Style {
        match (self.theme, active) {
            (Theme::Classic, false) => Style::default().fg(Color::DarkGray),
            (Theme::Classic, true) => Style::default().fg(Color::Black).bg(Color::Cyan),
            (Theme::Mono, false) => Style::default(),
            (Theme::Mono, true) => Style::default().add_modifier(Modifier::BOLD),
        }
    }

    /// Separators between outer squares.
    pub fn frame(&self) -> Style {
        match self.theme {
            Theme::Classic => Style::default().fg(Color::Gray),
            Theme::Mono => Style::default(),
        }
    }

    /// A placed mark, layered over the grid style of its square.
    pub fn mark(&self, player: Player, emphasized: bool) -> Style {
        let style = match self.theme {
            Theme::Classic => Style::default().fg(Self::player_color(player, emphasized)),
            Theme::Mono => Style::default(),
        }
        .add_modifier(Modifier::BOLD);

        if emphasized {
            style.add_modifier(Modifier::UNDERLINED)
        } else {
            style
        }
    }

    /// The cursor on a clickable cell, coloured by the player to move.
    pub fn cursor(&self, turn: Player) -> Style {
        match self.theme {
            Theme::Classic => Style::default()
                .fg(Color::Black)
                .bg(Self::player_color(turn, false)),
            Theme::Mono => Style::default().add_modifier(Modifier::REVERSED),
        }
    }

    /// Tint painted under the overlay glyph of a completed square.
    pub fn overlay(&self, completion: Completion, emphasized: bool) -> Option<Style> {
        if !completion.is_complete() {
            return None;
        }
        let style = match (self.theme, completion.winner()) {
            (Theme::Classic, Some(player)) => Style::default()
                .fg(Color::Black)
                .bg(Self::player_color(player, emphasized)),
            (Theme::Classic, None) => Style::default().fg(Color::Black).bg(Color::Gray),
            (Theme::Mono, _) => Style::default().add_modifier(Modifier::REVERSED),
        };
        Some(if emphasized {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        })
    }

    /// The status line.
    pub fn status(&self, status: GameStatus, turn: Player) -> Style {
        let style = match (self.theme, status) {
            (Theme::Classic, GameStatus::InProgress) => {
                Style::default().fg(Self::player_color(turn, false))
            }
            (Theme::Classic, GameStatus::Won(winner)) => {
                Style::default().fg(Self::player_color(winner, true))
            }
            (Theme::Classic, GameStatus::Draw) => Style::default().fg(Color::Yellow),
            (Theme::Mono, _) => Style::default(),
        };
        if status.is_over() {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    /// Secondary text such as key hints.
    pub fn hint(&self) -> Style {
        match self.theme {
            Theme::Classic => Style::default().fg(Color::DarkGray),
            Theme::Mono => Style::default().add_modifier(Modifier::DIM),
        }
    }
}
