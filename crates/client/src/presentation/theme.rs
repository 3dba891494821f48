//! Colour scheme for tiles, banners, and chrome.
use ratatui::style::{Color, Modifier, Style};

/// Ratatui styling rules for the board.
#[derive(Clone, Copy, Debug, Default)]
pub struct RatatuiTheme;

impl RatatuiTheme {
    pub fn new() -> Self {
        Self
    }

    /// Background and text colour for a cell holding `value` (0 is empty).
    pub fn tile(&self, value: u32) -> Style {
        let (bg, fg) = match value {
            0 => (Color::Rgb(205, 193, 180), Color::Rgb(205, 193, 180)),
            2 => (Color::Rgb(238, 228, 218), Color::Rgb(119, 110, 101)),
            4 => (Color::Rgb(237, 224, 200), Color::Rgb(119, 110, 101)),
            8 => (Color::Rgb(242, 177, 121), Color::White),
            16 => (Color::Rgb(245, 149, 99), Color::White),
            32 => (Color::Rgb(246, 124, 95), Color::White),
            64 => (Color::Rgb(246, 94, 59), Color::White),
            128 => (Color::Rgb(237, 207, 114), Color::White),
            256 => (Color::Rgb(237, 204, 97), Color::White),
            512 => (Color::Rgb(237, 200, 80), Color::White),
            1024 => (Color::Rgb(237, 197, 63), Color::White),
            2048 => (Color::Rgb(237, 194, 46), Color::White),
            _ => (Color::Rgb(60, 58, 50), Color::White),
        };

        let style = Style::default().bg(bg).fg(fg);
        if value >= 8 {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    pub fn grid(&self) -> Style {
        Style::default().bg(Color::Rgb(187, 173, 160))
    }

    pub fn score(&self) -> Style {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    }

    pub fn level_up(&self) -> Style {
        Style::default()
            .fg(Color::LightGreen)
            .add_modifier(Modifier::BOLD)
    }

    pub fn win(&self) -> Style {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    }

    pub fn game_over(&self) -> Style {
        Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD)
    }
}
