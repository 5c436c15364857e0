//! Text layout parsing and serialization for [`Board`].
//!
//! A layout lists the 8 rows separated by `/`, row 0 first. Within a row,
//! `l`/`d` are Light/Dark men, `L`/`D` are kings, and a digit 1-8 stands
//! for that many empty squares.

use std::str::FromStr;

use crate::board::Board;
use crate::error::LayoutError;
use crate::piece::Piece;
use crate::square::{BOARD_SIZE, Square};

/// The layout string for the standard starting position.
pub const STARTING_LAYOUT: &str = "1d1d1d1d/d1d1d1d1/1d1d1d1d/8/8/l1l1l1l1/1l1l1l1l/l1l1l1l1";

impl FromStr for Board {
    type Err = LayoutError;

    fn from_str(layout: &str) -> Result<Board, LayoutError> {
        let rows: Vec<&str> = layout.trim().split('/').collect();
        if rows.len() != BOARD_SIZE as usize {
            return Err(LayoutError::WrongRowCount { found: rows.len() });
        }

        let mut board = Board::empty();

        for (row, row_str) in rows.iter().enumerate() {
            let mut col: usize = 0;

            for c in row_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(LayoutError::InvalidChar { character: c });
                    }
                    col += digit as usize;
                    continue;
                }

                let piece =
                    Piece::from_layout_char(c).ok_or(LayoutError::InvalidChar { character: c })?;
                if col >= BOARD_SIZE as usize {
                    return Err(LayoutError::BadRowLength {
                        row,
                        length: col + 1,
                    });
                }
                let sq = Square::new(row as u8, col as u8).ok_or(LayoutError::BadRowLength {
                    row,
                    length: col + 1,
                })?;
                if !sq.is_dark() {
                    return Err(LayoutError::LightSquare { row, col });
                }
                board.place(sq, piece);
                col += 1;
            }

            if col != BOARD_SIZE as usize {
                return Err(LayoutError::BadRowLength { row, length: col });
            }
        }

        Ok(board)
    }
}

impl Board {
    /// Serialize the placement in layout notation.
    pub fn to_layout(&self) -> String {
        let mut out = String::with_capacity(72);
        let mut empty = 0u8;

        for sq in Square::all() {
            if sq.col() == 0 && sq.row() > 0 {
                out.push('/');
            }
            match self.piece_at(sq) {
                Some(piece) => {
                    if empty > 0 {
                        out.push(char::from(b'0' + empty));
                        empty = 0;
                    }
                    out.push(piece.layout_char());
                }
                None => empty += 1,
            }
            if sq.col() == BOARD_SIZE - 1 && empty > 0 {
                out.push(char::from(b'0' + empty));
                empty = 0;
            }
        }

        out
    }
}
