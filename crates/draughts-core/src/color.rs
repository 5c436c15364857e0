//! Piece colors and their direction of travel.

use std::fmt;

/// A side in the game: Light or Dark.
///
/// Light sets up on rows 5-7 and advances toward row 0. Dark sets up on
/// rows 0-2 and advances toward row 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    Light = 0,
    Dark = 1,
}

impl Color {
    /// Both colors, Light first.
    pub const ALL: [Color; 2] = [Color::Light, Color::Dark];

    /// Return the opposite color.
    #[inline]
    pub const fn flip(self) -> Color {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Row step of a forward move for an uncrowned piece of this color.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::Light => -1,
            Color::Dark => 1,
        }
    }

    /// The row on which a piece of this color is crowned.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::Light => 0,
            Color::Dark => 7,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Light => write!(f, "Light"),
            Color::Dark => write!(f, "Dark"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn flip_roundtrip() {
        assert_eq!(Color::Light.flip(), Color::Dark);
        assert_eq!(Color::Dark.flip(), Color::Light);
        assert_eq!(Color::Light.flip().flip(), Color::Light);
    }

    #[test]
    fn forward_points_at_promotion_row() {
        assert_eq!(Color::Light.forward(), -1);
        assert_eq!(Color::Light.promotion_row(), 0);
        assert_eq!(Color::Dark.forward(), 1);
        assert_eq!(Color::Dark.promotion_row(), 7);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Color::Light), "Light");
        assert_eq!(format!("{}", Color::Dark), "Dark");
    }
}
