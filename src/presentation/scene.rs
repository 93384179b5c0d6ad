//! Pure mapping from bead counts to draw calls
//!
//! [`build_scene`] knows nothing about terminals: it lists the frame, rods,
//! labels and beads in canvas coordinates (origin top-left). Colours are left
//! to the renderer, which picks them per rod.

use super::layout::{
    bead_side, bead_x, rod_center_y, BeadSide, BEAD_HEIGHT, BEAD_WIDTH, CANVAS_HEIGHT,
    CANVAS_WIDTH, PADDING, ROD_THICKNESS,
};
use crate::engine::constants::BEADS_PER_ROD;
use crate::engine::{Column, Counts};

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Dark board behind the rods
    Frame {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Rod {
        column: Column,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Label {
        column: Column,
        x: f64,
        y: f64,
        text: String,
    },
    Bead {
        column: Column,
        index: u8,
        side: BeadSide,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
}

/// Everything to draw for one state, back to front
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    pub shapes: Vec<Shape>,
}

impl Scene {
    pub fn beads(&self) -> impl Iterator<Item = &Shape> {
        self.shapes
            .iter()
            .filter(|shape| matches!(shape, Shape::Bead { .. }))
    }
}

pub fn build_scene(counts: &Counts) -> Scene {
    let mut shapes = vec![Shape::Frame {
        x: PADDING / 2.0,
        y: PADDING / 2.0,
        width: CANVAS_WIDTH - PADDING,
        height: CANVAS_HEIGHT - PADDING,
    }];

    for column in Column::ALL {
        let count = counts[column.index()];
        let y = rod_center_y(column);

        shapes.push(Shape::Rod {
            column,
            x: PADDING,
            y: y - ROD_THICKNESS / 2.0,
            width: CANVAS_WIDTH - PADDING * 2.0,
            height: ROD_THICKNESS,
        });
        shapes.push(Shape::Label {
            column,
            x: PADDING + 10.0,
            y: y - 15.0,
            text: column.name().to_uppercase(),
        });

        for index in 0..BEADS_PER_ROD {
            shapes.push(Shape::Bead {
                column,
                index,
                side: bead_side(index, count),
                x: bead_x(index, count),
                y: y - BEAD_HEIGHT / 2.0,
                width: BEAD_WIDTH,
                height: BEAD_HEIGHT,
            });
        }
    }

    Scene { shapes }
}
