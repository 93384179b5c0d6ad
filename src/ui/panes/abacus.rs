//! The abacus itself, drawn on a ratatui canvas
//!
//! The pane walks the [`Scene`] built from the snapshot and turns each shape
//! into canvas primitives. Scene coordinates grow downwards; the canvas grows
//! upwards, so every y is flipped on the way in.
//!
//! Beads are drawn as filled blocks: an outline rectangle plus one horizontal
//! line per canvas pixel row. Later shapes overwrite earlier ones, and canvas
//! text is always painted last, so rod labels stay readable.

use crate::engine::Column;
use crate::presentation::layout::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::presentation::{build_scene, Shape};
use crate::snapshot::Snapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{
        canvas::{Canvas, Context, Line as CanvasLine, Rectangle},
        Block, Borders,
    },
    Frame,
};

/// Render the abacus pane and return the inner area the canvas occupies,
/// which the app needs to turn mouse cells into canvas coordinates.
pub fn render_abacus_pane(
    frame: &mut Frame,
    area: Rect,
    snapshot: &Snapshot,
    selected: Column,
) -> Rect {
    let title = if snapshot.is_carrying {
        " Abacus · carrying… "
    } else {
        " Abacus "
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if snapshot.is_carrying {
            DEFAULT_THEME.secondary
        } else {
            DEFAULT_THEME.border_normal
        }));
    let inner = block.inner(area);

    // One canvas pixel row in scene units (half-block marker: 2 rows per cell)
    let row_step = CANVAS_HEIGHT / (inner.height.max(1) as f64 * 2.0);
    let scene = build_scene(&snapshot.counts);

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::HalfBlock)
        .x_bounds([0.0, CANVAS_WIDTH])
        .y_bounds([0.0, CANVAS_HEIGHT])
        .paint(|ctx| {
            for shape in &scene.shapes {
                paint_shape(ctx, shape, selected, row_step);
            }
        });

    frame.render_widget(canvas, area);
    inner
}

fn paint_shape(ctx: &mut Context, shape: &Shape, selected: Column, row_step: f64) {
    match shape {
        Shape::Frame {
            x,
            y,
            width,
            height,
        } => {
            fill_rect(ctx, *x, *y, *width, *height, DEFAULT_THEME.board, row_step);
        }
        Shape::Rod {
            x,
            y,
            width,
            height,
            ..
        } => {
            let mid = flip(*y + *height / 2.0);
            ctx.draw(&CanvasLine {
                x1: *x,
                y1: mid,
                x2: *x + *width,
                y2: mid,
                color: DEFAULT_THEME.rod,
            });
        }
        Shape::Label { column, x, y, text } => {
            let style = if *column == selected {
                Style::default()
                    .fg(DEFAULT_THEME.border_focused)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.rod_label)
            };
            let marker = if *column == selected { "▶ " } else { "" };
            ctx.print(*x, flip(*y), Span::styled(format!("{}{}", marker, text), style));
        }
        Shape::Bead {
            column,
            x,
            y,
            width,
            height,
            ..
        } => {
            fill_rect(
                ctx,
                *x,
                *y,
                *width,
                *height,
                DEFAULT_THEME.bead(*column),
                row_step,
            );
        }
    }
}

fn fill_rect(
    ctx: &mut Context,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    color: Color,
    row_step: f64,
) {
    let bottom = flip(y + height);
    ctx.draw(&Rectangle {
        x,
        y: bottom,
        width,
        height,
        color,
    });

    let mut row = bottom;
    while row <= bottom + height {
        ctx.draw(&CanvasLine {
            x1: x,
            y1: row,
            x2: x + width,
            y2: row,
            color,
        });
        row += row_step;
    }
}

fn flip(y: f64) -> f64 {
    CANVAS_HEIGHT - y
}
