//! Error types for move validation and layout parsing.

use std::fmt;

use crate::color::Color;

/// Why a move was rejected.
///
/// Variants are listed in the order the checks run; a rejected move reports
/// the first check it fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum IllegalMove {
    /// The game has ended; no further moves are accepted.
    #[error("the game is over")]
    GameOver,

    /// The start square is empty.
    #[error("no piece at the starting position")]
    NoPieceAtStart,

    /// The piece on the start square belongs to the side not on move.
    #[error("it's {current}'s turn")]
    NotYourTurn {
        /// The side whose turn it is.
        current: Color,
    },

    /// The move is not along a diagonal, or does not move at all.
    #[error("move must be diagonal")]
    NotDiagonal,

    /// An uncrowned piece tried to move away from its promotion row.
    #[error("{color} men can only move toward row {}", .color.promotion_row())]
    WrongDirection {
        /// Color of the piece that tried to move.
        color: Color,
    },

    /// The destination square already holds a piece.
    #[error("end position must be empty")]
    DestinationOccupied,

    /// More than one piece lies between the start and end squares.
    #[error("can't jump over more than one piece")]
    CantJumpMultiple,

    /// An uncrowned piece tried to slide more than one square without capturing.
    #[error("men can't move that far")]
    NonKingTooFar,

    /// An uncrowned piece tried to jump a piece that is not next to it.
    #[error("men must jump a piece on the adjacent square")]
    AdjacentJumpOnly,

    /// The landing square is not directly behind the jumped piece.
    #[error("a capture must land on the square directly behind the jumped piece")]
    OneSquareBehindOnly,
}

/// Errors that occur when parsing a board layout string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The layout does not have exactly 8 `/`-separated rows.
    WrongRowCount {
        /// Number of rows found.
        found: usize,
    },
    /// A row describes more or fewer than 8 squares.
    BadRowLength {
        /// Zero-based row index.
        row: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in a row.
    InvalidChar {
        /// The invalid character.
        character: char,
    },
    /// A piece was placed on a light square, where play never happens.
    LightSquare {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        col: usize,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::WrongRowCount { found } => {
                write!(f, "expected 8 rows in layout, found {found}")
            }
            LayoutError::BadRowLength { row, length } => {
                write!(f, "row {row} describes {length} squares, expected 8")
            }
            LayoutError::InvalidChar { character } => {
                write!(f, "invalid layout character: '{character}'")
            }
            LayoutError::LightSquare { row, col } => {
                write!(f, "piece on light square ({row},{col})")
            }
        }
    }
}

impl std::error::Error for LayoutError {}
