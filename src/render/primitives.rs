use serde::{Deserialize, Serialize};

/// Terminal color as understood by the console driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Color {
    /// Whatever the terminal uses when no color is set.
    #[default]
    Reset,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    Gray,
    White,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    Rgb(u8, u8, u8),
}

/// Foreground/background pair applied to subsequently written cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Attribute {
    pub foreground: Color,
    pub background: Color,
}

impl Attribute {
    #[must_use]
    pub const fn new(foreground: Color, background: Color) -> Self {
        Self {
            foreground,
            background,
        }
    }

    #[must_use]
    pub const fn fg(foreground: Color) -> Self {
        Self::new(foreground, Color::Reset)
    }
}

/// Attributes the host widget exposes for its current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ColorScheme {
    pub normal: Attribute,
    pub focus: Attribute,
}

/// One character cell plus an optional color override.
///
/// An unset color falls back to the graph's ambient color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellGlyph {
    pub symbol: char,
    pub color: Option<Attribute>,
}

impl CellGlyph {
    #[must_use]
    pub const fn new(symbol: char) -> Self {
        Self {
            symbol,
            color: None,
        }
    }

    #[must_use]
    pub const fn with_color(symbol: char, color: Attribute) -> Self {
        Self {
            symbol,
            color: Some(color),
        }
    }
}

/// Named line-drawing glyphs supplied by the console driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineGlyphs {
    pub horizontal: char,
    pub vertical: char,
    /// `┬`, used for ticks hanging below a horizontal axis.
    pub top_tee: char,
    /// `┴`
    pub bottom_tee: char,
    /// `├`
    pub left_tee: char,
    /// `┤`, used for ticks on a vertical axis with labels to its left.
    pub right_tee: char,
    pub crosshair: char,
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
}

impl LineGlyphs {
    /// Plain ASCII fallback for terminals without box-drawing support.
    #[must_use]
    pub const fn ascii() -> Self {
        Self {
            horizontal: '-',
            vertical: '|',
            top_tee: '+',
            bottom_tee: '+',
            left_tee: '+',
            right_tee: '+',
            crosshair: '+',
            top_left: '+',
            top_right: '+',
            bottom_left: '+',
            bottom_right: '+',
        }
    }
}

impl Default for LineGlyphs {
    fn default() -> Self {
        Self {
            horizontal: '─',
            vertical: '│',
            top_tee: '┬',
            bottom_tee: '┴',
            left_tee: '├',
            right_tee: '┤',
            crosshair: '┼',
            top_left: '┌',
            top_right: '┐',
            bottom_left: '└',
            bottom_right: '┘',
        }
    }
}
