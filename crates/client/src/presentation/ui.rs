//! Frame composition: header, board, banner, and key help.
use anyhow::Result;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use twenty48_core::{Board, GameConfig, GameSession, Position};

use crate::presentation::{terminal::Tui, theme::RatatuiTheme};

const CELL_WIDTH: u16 = 8;
const CELL_HEIGHT: u16 = 3;

pub fn render(terminal: &mut Tui, session: &GameSession, config: &GameConfig) -> Result<()> {
    terminal.draw(|frame| draw(frame, session, config))?;
    Ok(())
}

/// Draws one full frame for `session`.
pub fn draw(frame: &mut Frame, session: &GameSession, config: &GameConfig) {
    let theme = RatatuiTheme::new();
    let [header, board, banner, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(3),
        Constraint::Length(3),
    ])
    .areas(frame.area());

    render_header(frame, header, session, &theme);
    render_board(frame, board, session.board(), &theme);
    render_banner(frame, banner, session, config, &theme);
    render_footer(frame, footer, session);
}

fn render_header(frame: &mut Frame, area: Rect, session: &GameSession, theme: &RatatuiTheme) {
    let size = session.board().size();
    let text = Line::from(vec![
        Span::raw(format!("Level: {}", session.level())),
        Span::raw(format!(" | Grid: {size} × {size}")),
        Span::raw(format!(" | Best tile: {}", session.board().max_tile())),
        Span::raw(" | Score: "),
        Span::styled(session.score().to_string(), theme.score()),
        Span::raw(" | High Score: "),
        Span::styled(session.high_score().to_string(), theme.score()),
    ]);

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" 2048 "));
    frame.render_widget(paragraph, area);
}

fn render_board(frame: &mut Frame, area: Rect, board: &Board, theme: &RatatuiTheme) {
    let size = board.size();
    let edge = size as u16;
    let grid = centered(area, edge * CELL_WIDTH + 2, edge * CELL_HEIGHT + 2);

    let block = Block::default().borders(Borders::ALL).style(theme.grid());
    let inner = block.inner(grid);
    frame.render_widget(block, grid);

    let rows = Layout::vertical(vec![Constraint::Length(CELL_HEIGHT); size]).split(inner);
    for (row, row_area) in rows.iter().enumerate() {
        let cols = Layout::horizontal(vec![Constraint::Length(CELL_WIDTH); size]).split(*row_area);
        for (col, cell_area) in cols.iter().enumerate() {
            let value = board.get(Position::new(row, col));
            let label = if value == 0 {
                String::new()
            } else {
                value.to_string()
            };

            let tile = Paragraph::new(vec![Line::default(), Line::from(label)])
                .alignment(Alignment::Center)
                .style(theme.tile(value));
            frame.render_widget(tile, cell_area.inner(Margin::new(1, 0)));
        }
    }
}

fn render_banner(
    frame: &mut Frame,
    area: Rect,
    session: &GameSession,
    config: &GameConfig,
    theme: &RatatuiTheme,
) {
    let line = if let Some(ticket) = session.pending_level_up() {
        Line::styled(
            format!("Good job! Moving to level {}...", ticket.target()),
            theme.level_up(),
        )
    } else if session.is_game_over() {
        Line::styled("Game over! Press [n] to try again.", theme.game_over())
    } else if session.has_won() {
        Line::styled("You win! Keep going for a higher score.", theme.win())
    } else if session.level().next().is_some() {
        Line::raw(format!(
            "Reach {} to unlock the next level.",
            config.level_up_tile
        ))
    } else {
        Line::raw(format!("Join the tiles, get to {}!", config.win_tile))
    };

    let paragraph = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn render_footer(frame: &mut Frame, area: Rect, session: &GameSession) {
    let mut spans = vec![
        Span::raw("[Arrows/hjkl/WASD] Move | "),
        Span::raw("[n] New game | "),
    ];
    if session.can_skip_level() {
        spans.push(Span::raw("[>/Tab] Next level | "));
    }
    spans.push(Span::raw("[q] Quit"));

    let paragraph = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

/// Rect of at most `width`×`height` centred inside `area`.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};
    use twenty48_core::{GameEnv, PcgRng};

    fn rendered(session: &GameSession, config: &GameConfig) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| draw(frame, session, config)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn frame_shows_level_and_scores() {
        let config = GameConfig::default();
        let session = GameSession::new(GameEnv::new(&config, &PcgRng), 3, 128);
        let screen = rendered(&session, &config);

        assert!(screen.contains("Level: 1"));
        assert!(screen.contains("Grid: 3 × 3"));
        assert!(screen.contains(&format!("Best tile: {}", session.board().max_tile())));
        assert!(screen.contains("High Score: 128"));
        assert!(screen.contains("Reach 64 to unlock the next level."));
        assert!(screen.contains("[>/Tab] Next level"));
    }

    #[test]
    fn second_level_hides_next_level_hint() {
        let config = GameConfig::default();
        let env = GameEnv::new(&config, &PcgRng);
        let session = GameSession::new(env, 3, 0).skip_level(env).unwrap();
        let screen = rendered(&session, &config);

        assert!(screen.contains("Grid: 4 × 4"));
        assert!(screen.contains("Join the tiles, get to 2048!"));
        assert!(!screen.contains("Next level"));
    }

    #[test]
    fn centered_clamps_to_available_space() {
        let area = Rect::new(0, 0, 10, 4);
        assert_eq!(centered(area, 20, 2), Rect::new(0, 1, 10, 2));
        assert_eq!(centered(area, 4, 4), Rect::new(3, 0, 4, 4));
    }
}
