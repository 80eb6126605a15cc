use crate::steps::StepKind;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub keyword: Color,
    pub string: Color,
    pub number: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub function: Color,
    pub builtin: Color,
    pub bar: Color,       // Resting data bar
    pub merge: Color,     // Pink for merge writes
    pub partition: Color, // Cyan for partition ranges
}

impl Theme {
    /// Bar color for an index highlighted by a step of `kind`
    pub fn highlight_for(&self, kind: StepKind) -> Color {
        match kind {
            StepKind::Compare => self.secondary,
            StepKind::Swap => self.error,
            StepKind::Found => self.success,
            StepKind::NotFound => self.comment,
            StepKind::Partition => self.partition,
            StepKind::Merge => self.merge,
            StepKind::Info => self.function,
        }
    }
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    keyword: Color::Rgb(137, 180, 250),        // Blue for keywords
    string: Color::Rgb(250, 179, 135),         // Orange for strings
    number: Color::Rgb(250, 179, 135),         // Orange for numbers
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for current line
    function: Color::Rgb(249, 226, 175),       // Yellow for functions
    builtin: Color::Rgb(148, 226, 213),        // Cyan/teal for builtins
    bar: Color::Rgb(74, 144, 226),
    merge: Color::Rgb(245, 194, 231),
    partition: Color::Rgb(148, 226, 213),
};
