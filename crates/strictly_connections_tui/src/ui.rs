//! Terminal rendering for the puzzle board, feedback, and modal.

use crate::app::{App, GRID_COLUMNS};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use strictly_connections::{Category, ColorTag, MISTAKE_BUDGET, PALETTE};

/// Height of one word tile, including its border.
const TILE_HEIGHT: u16 = 3;

/// Height of one solved-category banner.
const BANNER_HEIGHT: u16 = 2;

/// Draws the whole frame.
pub fn draw(f: &mut Frame, app: &App) {
    let grid_rows = app.words().len().div_ceil(GRID_COLUMNS) as u16;
    let banners = app.solved().len() as u16;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(banners * BANNER_HEIGHT),
            Constraint::Length(grid_rows * TILE_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_banners(f, chunks[1], app.solved());
    render_grid(f, chunks[2], app);
    render_mistakes(f, chunks[3], app.mistakes());
    render_status(f, chunks[4], app);
    render_help(f, chunks[5]);

    if let Some((won, remaining)) = app.outcome() {
        render_modal(f, *won, remaining);
    }

    render_confetti(f, app);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "STRICTLY CONNECTIONS",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Create four groups of four!",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(header, area);
}

fn render_banners(f: &mut Frame, area: Rect, solved: &[Category]) {
    if solved.is_empty() {
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(BANNER_HEIGHT); solved.len()])
        .split(area);

    for (category, row) in solved.iter().zip(rows.iter()) {
        let style = Style::default()
            .bg(tier_color(*category.color()))
            .fg(Color::Black);
        let banner = Paragraph::new(vec![
            Line::from(Span::styled(
                category.name().clone(),
                style.add_modifier(Modifier::BOLD),
            )),
            Line::from(category.words().join(", ")),
        ])
        .style(style)
        .alignment(Alignment::Center);
        f.render_widget(banner, *row);
    }
}

fn render_grid(f: &mut Frame, area: Rect, app: &App) {
    let words = app.words();
    if words.is_empty() {
        return;
    }

    let row_count = words.len().div_ceil(GRID_COLUMNS);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(TILE_HEIGHT); row_count])
        .split(area);

    for (row_index, row) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![
                Constraint::Ratio(1, GRID_COLUMNS as u32);
                GRID_COLUMNS
            ])
            .split(*row);

        for col_index in 0..GRID_COLUMNS {
            let index = row_index * GRID_COLUMNS + col_index;
            if let Some(word) = words.get(index) {
                render_tile(f, cols[col_index], app, index, word);
            }
        }
    }
}

fn render_tile(f: &mut Frame, area: Rect, app: &App, index: usize, word: &str) {
    let mut style = Style::default();
    if app.is_selected(index) {
        style = style
            .bg(Color::White)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD);
    }
    if app.is_shaking(index) {
        style = style.fg(Color::Red).add_modifier(Modifier::BOLD);
    }

    let border_style = if index == app.cursor() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let tile = Paragraph::new(word.to_string())
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border_style));
    f.render_widget(tile, area);
}

fn render_mistakes(f: &mut Frame, area: Rect, remaining: u8) {
    let mut spans = vec![Span::raw("Mistakes remaining: ")];
    for slot in 0..MISTAKE_BUDGET {
        let dot = if slot < remaining {
            Span::styled("● ", Style::default().fg(Color::LightMagenta))
        } else {
            Span::styled("○ ", Style::default().fg(Color::DarkGray))
        };
        spans.push(dot);
    }

    let line = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    f.render_widget(line, area);
}

fn render_status(f: &mut Frame, area: Rect, app: &App) {
    let style = if app.submit_enabled() {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let status = Paragraph::new(Span::styled(app.status().to_string(), style))
        .alignment(Alignment::Center);
    f.render_widget(status, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let help = Paragraph::new(
        "arrows move | space select | enter submit | d deselect | s shuffle | r restart | q quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    f.render_widget(help, area);
}

fn render_modal(f: &mut Frame, won: bool, remaining: &[Category]) {
    let height = 6 + remaining.len() as u16 * 2;
    let area = center_rect(f.area(), 48, height);

    let (title, message) = if won {
        ("Congratulations!", "You found all the connections!")
    } else {
        ("Game Over", "Better luck next time!")
    };

    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled(
            message,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];
    for category in remaining {
        lines.push(Line::from(Span::styled(
            category.name().clone(),
            Style::default()
                .fg(tier_color(*category.color()))
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(category.words().join(", ")));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "r play again | q quit",
        Style::default().fg(Color::DarkGray),
    )));

    f.render_widget(Clear, area);
    let modal = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(modal, area);
}

fn render_confetti(f: &mut Frame, app: &App) {
    let Some(effect) = app.confetti() else {
        return;
    };

    let area = f.area();
    let buffer = f.buffer_mut();
    for particle in effect.particles() {
        if particle.y < 0.0 || particle.x < 0.0 {
            continue;
        }

        let x = particle.x as u16;
        let y = particle.y as u16;
        if x >= area.width || y >= area.height {
            continue;
        }

        let (r, g, b) = PALETTE[particle.color % PALETTE.len()];
        if let Some(cell) = buffer.cell_mut(Position::new(x, y)) {
            cell.set_char('*');
            cell.set_fg(Color::Rgb(r, g, b));
        }
    }
}

fn tier_color(tag: ColorTag) -> Color {
    match tag {
        ColorTag::Yellow => Color::Yellow,
        ColorTag::Green => Color::Green,
        ColorTag::Blue => Color::Blue,
        ColorTag::Purple => Color::Magenta,
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width.min(area.width)),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height.min(area.height)),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(horizontal[1])[1]
}
