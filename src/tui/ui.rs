//! Stateless rendering for the game screen.

use super::app::App;
use super::theme::Theme;
use crate::games::tictactoe::{Board, Mark, Position, Square};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let theme = app.theme();
    let area = frame.area();

    // Paint the themed background across the whole terminal.
    let backdrop = Block::default().style(Style::default().bg(theme.background()));
    frame.render_widget(backdrop, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title + scores
            Constraint::Min(11),   // Board
            Constraint::Length(4), // Status + advisory
            Constraint::Length(1), // Help
        ])
        .split(area);

    draw_header(frame, chunks[0], app, theme);
    draw_board(frame, chunks[1], app.match_state().game().state().board(), theme);
    draw_status(frame, chunks[2], app, theme);
    draw_help(frame, chunks[3], theme);
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App, theme: Theme) {
    let scores = app.match_state().scores();
    let title = Line::from(vec![
        Span::styled(
            "Tic Tac Toe",
            Style::default()
                .fg(theme.primary())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  [{}]", app.match_state().mode().name()),
            Style::default().fg(theme.foreground()),
        ),
        Span::raw("   "),
        Span::styled("X: ", Style::default().fg(theme.mark(Mark::X))),
        Span::styled(
            scores.wins(Mark::X).to_string(),
            Style::default().fg(theme.foreground()),
        ),
        Span::styled(" | ", Style::default().fg(theme.dim())),
        Span::styled("O: ", Style::default().fg(theme.mark(Mark::O))),
        Span::styled(
            scores.wins(Mark::O).to_string(),
            Style::default().fg(theme.foreground()),
        ),
    ]);

    let header = Paragraph::new(title)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(theme.primary())),
        );
    frame.render_widget(header, area);
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, theme: Theme) {
    let board_area = center_rect(area, 23, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    let grid = [
        [Position::TopLeft, Position::TopCenter, Position::TopRight],
        [
            Position::MiddleLeft,
            Position::Center,
            Position::MiddleRight,
        ],
        [
            Position::BottomLeft,
            Position::BottomCenter,
            Position::BottomRight,
        ],
    ];

    draw_row(frame, rows[0], board, theme, &grid[0]);
    draw_separator(frame, rows[1], theme);
    draw_row(frame, rows[2], board, theme, &grid[1]);
    draw_separator(frame, rows[3], theme);
    draw_row(frame, rows[4], board, theme, &grid[2]);
}

fn draw_row(frame: &mut Frame, area: Rect, board: &Board, theme: Theme, positions: &[Position; 3]) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
        ])
        .split(area);

    draw_cell(frame, cols[0], board, theme, positions[0]);
    draw_vertical_separator(frame, cols[1], theme);
    draw_cell(frame, cols[2], board, theme, positions[1]);
    draw_vertical_separator(frame, cols[3], theme);
    draw_cell(frame, cols[4], board, theme, positions[2]);
}

fn draw_cell(frame: &mut Frame, area: Rect, board: &Board, theme: Theme, pos: Position) {
    let (symbol, style) = match board.get(pos) {
        Square::Occupied(mark) => (
            mark.to_string(),
            Style::default()
                .fg(theme.mark(mark))
                .add_modifier(Modifier::BOLD),
        ),
        // Empty cells show their key digit.
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(theme.dim()),
        ),
    };

    let cell = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center)
        .block(Block::default().style(Style::default().bg(theme.background())));
    // Nudge the glyph to the vertical middle of the 3-line cell.
    let middle = Rect {
        y: area.y + 1,
        height: 1,
        ..area
    };
    frame.render_widget(cell, middle);
}

fn draw_separator(frame: &mut Frame, area: Rect, theme: Theme) {
    let line = Paragraph::new("-------+-------+-------")
        .style(Style::default().fg(theme.dim()))
        .alignment(Alignment::Center);
    frame.render_widget(line, area);
}

fn draw_vertical_separator(frame: &mut Frame, area: Rect, theme: Theme) {
    for offset in 0..area.height {
        let row = Rect {
            y: area.y + offset,
            height: 1,
            ..area
        };
        let bar = Paragraph::new("|").style(Style::default().fg(theme.dim()));
        frame.render_widget(bar, row);
    }
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App, theme: Theme) {
    let mut lines = vec![Line::from(Span::styled(
        app.status_line(),
        Style::default().fg(theme.foreground()),
    ))];
    if let Some(advisory) = app.ai_error() {
        lines.push(Line::from(Span::styled(
            format!("AI error: {advisory}"),
            Style::default().fg(theme.error()),
        )));
    }

    let status = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(theme.primary())),
        );
    frame.render_widget(status, area);
}

fn draw_help(frame: &mut Frame, area: Rect, theme: Theme) {
    let help = Paragraph::new("1-9 place  m mode  r restart  t theme  q quit")
        .style(Style::default().fg(theme.dim()))
        .alignment(Alignment::Center);
    frame.render_widget(help, area);
}

/// Centers a fixed-size rect inside `area`, clamping to its bounds.
fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}
