//! Core draughts types: board representation, pieces, and move legality.

mod board;
mod color;
mod error;
mod layout;
mod piece;
pub mod rules;
mod square;

pub use board::{Board, PrettyBoard};
pub use color::Color;
pub use error::{IllegalMove, LayoutError};
pub use layout::STARTING_LAYOUT;
pub use piece::Piece;
pub use rules::CapturePath;
pub use square::{BOARD_SIZE, Square};
