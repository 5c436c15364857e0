//! Colored draughts piece, bit-packed into a single byte.

use std::fmt;

use crate::color::Color;

const COLOR_BIT: u8 = 0b01;
const KING_BIT: u8 = 0b10;

/// A colored piece: a man, or a king once crowned.
///
/// Bit layout:
/// - bit 0: [`Color`] (0 = Light, 1 = Dark)
/// - bit 1: king flag
///
/// The color is fixed for the life of the piece. The king flag only ever
/// goes from unset to set.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece(u8);

impl Piece {
    /// Light man.
    pub const LIGHT_MAN: Piece = Piece::new(Color::Light);
    /// Dark man.
    pub const DARK_MAN: Piece = Piece::new(Color::Dark);
    /// Light king.
    pub const LIGHT_KING: Piece = Piece::LIGHT_MAN.crowned();
    /// Dark king.
    pub const DARK_KING: Piece = Piece::DARK_MAN.crowned();

    /// All four pieces: men first, then kings.
    pub const ALL: [Piece; 4] = [
        Self::LIGHT_MAN,
        Self::DARK_MAN,
        Self::LIGHT_KING,
        Self::DARK_KING,
    ];

    /// Create an uncrowned piece of the given color.
    #[inline]
    pub const fn new(color: Color) -> Piece {
        Piece(color as u8)
    }

    /// Return the color (bit 0).
    #[inline]
    pub const fn color(self) -> Color {
        match self.0 & COLOR_BIT {
            0 => Color::Light,
            _ => Color::Dark,
        }
    }

    /// Return `true` if this piece has been crowned.
    #[inline]
    pub const fn is_king(self) -> bool {
        self.0 & KING_BIT != 0
    }

    /// Return the crowned version of this piece.
    #[inline]
    pub const fn crowned(self) -> Piece {
        Piece(self.0 | KING_BIT)
    }

    /// Crown this piece in place. Crowning a king is a no-op.
    #[inline]
    pub fn promote(&mut self) {
        self.0 |= KING_BIT;
    }

    /// Return the layout character: `l`/`d` for men, `L`/`D` for kings.
    #[inline]
    pub const fn layout_char(self) -> char {
        match (self.color(), self.is_king()) {
            (Color::Light, false) => 'l',
            (Color::Light, true) => 'L',
            (Color::Dark, false) => 'd',
            (Color::Dark, true) => 'D',
        }
    }

    /// Parse a layout character into a piece.
    pub fn from_layout_char(c: char) -> Option<Piece> {
        match c {
            'l' => Some(Piece::LIGHT_MAN),
            'L' => Some(Piece::LIGHT_KING),
            'd' => Some(Piece::DARK_MAN),
            'D' => Some(Piece::DARK_KING),
            _ => None,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.layout_char())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_prefix = match self.color() {
            Color::Light => 'L',
            Color::Dark => 'D',
        };
        let kind_char = if self.is_king() { 'K' } else { 'M' };
        write!(f, "{color_prefix}{kind_char}")
    }
}
