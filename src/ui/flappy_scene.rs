//! Terminal rendering of the play field.

use super::game_common::{create_game_layout, render_game_over_banner, render_status_bar};
use crate::sim::{Rect as WorldRect, WorldView};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// What a single terminal cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Pipe,
    PassedPipe,
    Bird,
}

/// Sample the world onto a `width` x `height` grid of cells.
///
/// Pipes are sampled at each cell's center. The bird is drawn in every cell
/// its box overlaps so it never vanishes between samples.
pub fn rasterize(view: &WorldView, width: usize, height: usize) -> Vec<Vec<Cell>> {
    if width == 0 || height == 0 {
        return Vec::new();
    }
    let cell_w = view.screen_width / width as f64;
    let cell_h = view.screen_height / height as f64;

    (0..height)
        .map(|row| {
            (0..width)
                .map(|col| {
                    let cell = WorldRect::new(col as f64 * cell_w, row as f64 * cell_h, cell_w, cell_h);
                    if view.player.intersects(&cell) {
                        return Cell::Bird;
                    }
                    let (cx, cy) = (cell.x + cell_w / 2.0, cell.y + cell_h / 2.0);
                    view.obstacles
                        .iter()
                        .find(|o| o.upper.contains_point(cx, cy) || o.lower.contains_point(cx, cy))
                        .map(|o| if o.passed { Cell::PassedPipe } else { Cell::Pipe })
                        .unwrap_or(Cell::Empty)
                })
                .collect()
        })
        .collect()
}

fn bird_glyph(velocity: f64) -> &'static str {
    if velocity < -2.0 {
        "▲"
    } else if velocity > 4.0 {
        "▼"
    } else {
        "►"
    }
}

/// Render the whole game screen.
pub fn render_flappy(frame: &mut Frame, area: Rect, view: &WorldView, demo: bool) {
    let title = if demo { " Flappy (demo) " } else { " Flappy " };
    let layout = create_game_layout(frame, area, title, Color::Cyan);

    render_play_area(frame, layout.content, view);

    let status = format!("Score: {}", view.score);
    if view.game_over {
        render_status_bar(
            frame,
            layout.status_bar,
            &status,
            Color::Red,
            &[("[Space]", "Restart"), ("[Q/Esc]", "Quit")],
        );
        render_game_over_banner(
            frame,
            layout.content,
            "GAME OVER!",
            "Press SPACE to restart",
        );
    } else {
        render_status_bar(
            frame,
            layout.status_bar,
            &status,
            Color::Green,
            &[("[Space/Up/Enter]", "Flap"), ("[Q/Esc]", "Quit")],
        );
    }
}

fn render_play_area(frame: &mut Frame, area: Rect, view: &WorldView) {
    let grid = rasterize(view, area.width as usize, area.height as usize);
    let bird = bird_glyph(view.player_velocity);

    let lines: Vec<Line> = grid
        .iter()
        .map(|row| {
            Line::from(
                row.iter()
                    .map(|cell| match cell {
                        Cell::Bird => Span::styled(
                            bird,
                            Style::default()
                                .fg(Color::Yellow)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Cell::Pipe => Span::styled("█", Style::default().fg(Color::Green)),
                        Cell::PassedPipe => {
                            Span::styled("█", Style::default().fg(Color::DarkGray))
                        }
                        Cell::Empty => Span::raw(" "),
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(Color::Blue)),
        area,
    );
}
