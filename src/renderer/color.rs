//! Named paint colors

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    Blue,
    Gray,
    Green,
    Orange,
    Red,
    White,
}

impl Color {
    /// CSS color string for the browser canvas
    pub fn as_css(&self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Blue => "blue",
            Color::Gray => "#808080",
            Color::Green => "green",
            Color::Orange => "orange",
            Color::Red => "red",
            Color::White => "white",
        }
    }
}

/// Colors for scene elements
pub mod colors {
    use super::Color;

    pub const PIVOT: Color = Color::Red;
    pub const NEEDLE: Color = Color::Green;
    pub const SHIP: Color = Color::White;
    pub const EXHAUST: Color = Color::Red;
    pub const HUD_TEXT: Color = Color::White;
}
