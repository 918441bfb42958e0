//! Common structs and enums

/// Black or White Color
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Color {
    /// No-Ink
    White,
    /// Ink
    Black,
}

impl Default for Color {
    fn default() -> Self {
        Color::White
    }
}

impl From<bool> for Color {
    fn from(b: bool) -> Color {
        if b {
            Color::Black
        } else {
            Color::White
        }
    }
}

impl Color {
    /// Threshold a gray value
    ///
    /// Bytes with the top bit set are white, all others are black.
    pub fn from_gray(value: u8) -> Color {
        if value & 0x80 != 0 {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Invert a color
    pub fn invert(&mut self) {
        *self = self.inverted();
    }

    /// Return the other color
    pub fn inverted(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}
