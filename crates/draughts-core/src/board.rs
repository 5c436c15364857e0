//! The draughts board: an arena of optional pieces indexed by square.

use std::fmt;

use crate::color::Color;
use crate::piece::Piece;
use crate::square::Square;

/// Number of rows each side fills at the start of a game.
const HOME_ROWS: u8 = 3;

/// Piece placement on the 8x8 board.
///
/// The board owns every piece on it. Moving a piece swaps arena slots, so a
/// piece is only ever reachable through one square.
///
/// Mutators do no rule checking; callers validate first.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; Square::COUNT],
}

impl Board {
    /// Return a board with no pieces on it.
    pub const fn empty() -> Board {
        Board {
            squares: [None; Square::COUNT],
        }
    }

    /// Return the standard starting position.
    ///
    /// Dark fills the playing squares of rows 0-2, Light those of rows 5-7.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for sq in Square::all().filter(|sq| sq.is_dark()) {
            if sq.row() < HOME_ROWS {
                board.place(sq, Piece::DARK_MAN);
            } else if sq.row() >= 8 - HOME_ROWS {
                board.place(sq, Piece::LIGHT_MAN);
            }
        }
        board
    }

    /// Return the piece on `sq`, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// Return `true` if `sq` holds a piece.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_some()
    }

    /// Put `piece` on `sq`, replacing whatever was there.
    #[inline]
    pub fn place(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.index()] = Some(piece);
    }

    /// Clear `sq`, returning the piece that stood there.
    #[inline]
    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()].take()
    }

    /// Move the piece on `from` to `to` and leave `from` empty.
    ///
    /// Whatever stood on `to` is discarded; callers check emptiness first.
    pub fn move_piece(&mut self, from: Square, to: Square) {
        self.squares.swap(from.index(), to.index());
        self.squares[from.index()] = None;
    }

    /// Crown the piece on `sq`. Returns `true` if a man became a king.
    pub fn promote(&mut self, sq: Square) -> bool {
        match &mut self.squares[sq.index()] {
            Some(piece) if !piece.is_king() => {
                piece.promote();
                true
            }
            _ => false,
        }
    }

    /// Iterate over every occupied square and its piece, in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Count the pieces of `color` still on the board.
    pub fn count(&self, color: Color) -> usize {
        self.occupied()
            .filter(|(_, piece)| piece.color() == color)
            .count()
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self.to_layout())
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid, row 0 at the top.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for (i, sq) in Square::all().enumerate() {
            if sq.col() == 0 {
                write!(f, "{}  ", sq.row())?;
            }
            let c = match board.piece_at(sq) {
                Some(piece) => piece.layout_char(),
                None => '.',
            };
            if sq.col() < 7 {
                write!(f, "{c} ")?;
            } else if i < Square::COUNT - 1 {
                writeln!(f, "{c}")?;
            } else {
                write!(f, "{c}")?;
            }
        }
        write!(f, "\n   0 1 2 3 4 5 6 7")
    }
}
