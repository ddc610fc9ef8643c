/// A 24-bit terminal color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Foreground and background of a cell. `None` leaves the cell's current
/// color in place.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
}

impl Style {
    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// `other` drawn over `self`: colors set in `other` win.
    pub fn patch(self, other: Style) -> Self {
        Self {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
        }
    }
}

/// Fixed palette of the mockup.
pub mod palette {
    use super::Color;

    pub const RED: Color = Color::rgb(0xC0, 0x40, 0x40);
    pub const GREEN: Color = Color::rgb(0x40, 0xC0, 0x40);
    pub const BLUE: Color = Color::rgb(0x40, 0x40, 0xC0);
    pub const TEXT: Color = Color::rgb(0x20, 0x20, 0x20);
    pub const PAPER: Color = Color::rgb(0xF0, 0xF0, 0xF0);
    pub const MUTED: Color = Color::rgb(0xC0, 0xC0, 0xC0);
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/style.rs"]
mod tests;
