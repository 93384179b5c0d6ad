use crate::engine::Column;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub board: Color,      // Dark wood behind the rods
    pub rod: Color,        // Brushed metal
    pub rod_label: Color,  // Faint label over each rod
    pub beads: [Color; 4], // One per rod, Ones first
}

impl Theme {
    pub fn bead(&self, column: Column) -> Color {
        self.beads[column.index()]
    }
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for bars
    board: Color::Rgb(51, 26, 0),
    rod: Color::Rgb(200, 200, 200),
    rod_label: Color::Rgb(120, 100, 80),
    beads: [
        Color::Rgb(245, 158, 11), // Yellow
        Color::Rgb(34, 197, 94),  // Green
        Color::Rgb(59, 130, 246), // Blue
        Color::Rgb(239, 68, 68),  // Red
    ],
};
