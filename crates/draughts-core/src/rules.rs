//! Move legality: diagonal geometry, direction, and single-jump captures.

use crate::board::Board;
use crate::color::Color;
use crate::error::IllegalMove;
use crate::square::Square;

/// The pieces a move jumps over, in order from the start square.
///
/// Validation rejects any move crossing more than one piece, so a legal
/// move carries at most one captured square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CapturePath(Option<Square>);

impl CapturePath {
    /// A path that jumps nothing.
    pub const EMPTY: CapturePath = CapturePath(None);

    /// Return `true` if the move captures nothing.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Return the number of captured squares (0 or 1).
    #[inline]
    pub const fn len(&self) -> usize {
        match self.0 {
            Some(_) => 1,
            None => 0,
        }
    }

    /// Return the captured square, if any.
    #[inline]
    pub const fn captured(&self) -> Option<Square> {
        self.0
    }

    /// Iterate over the captured squares.
    pub fn squares(&self) -> impl Iterator<Item = Square> {
        self.0.into_iter()
    }
}

/// Decide whether `player` may move the piece on `start` to `end`.
///
/// Checks run in a fixed order and the first failure is returned:
/// occupancy, ownership, diagonality, direction, destination, then the
/// path between the two squares. On success the returned path holds the
/// square of the piece being jumped, if any.
///
/// Pieces on the path are counted whatever their color.
pub fn validate(
    board: &Board,
    player: Color,
    start: Square,
    end: Square,
) -> Result<CapturePath, IllegalMove> {
    let piece = board.piece_at(start).ok_or(IllegalMove::NoPieceAtStart)?;

    if piece.color() != player {
        return Err(IllegalMove::NotYourTurn { current: player });
    }

    let row_diff = end.row() as i8 - start.row() as i8;
    let col_diff = end.col() as i8 - start.col() as i8;
    if row_diff.abs() != col_diff.abs() || row_diff == 0 {
        return Err(IllegalMove::NotDiagonal);
    }

    if !piece.is_king() && row_diff.signum() != piece.color().forward() {
        return Err(IllegalMove::WrongDirection {
            color: piece.color(),
        });
    }

    if board.is_occupied(end) {
        return Err(IllegalMove::DestinationOccupied);
    }

    let distance = row_diff.unsigned_abs();
    let (step_row, step_col) = (row_diff.signum(), col_diff.signum());

    // (square, distance from start) of the first piece on the path
    let mut jumped: Option<(Square, u8)> = None;
    for i in 1..distance {
        let Some(sq) = start.offset(step_row * i as i8, step_col * i as i8) else {
            break;
        };
        if board.is_occupied(sq) {
            if jumped.is_some() {
                return Err(IllegalMove::CantJumpMultiple);
            }
            jumped = Some((sq, i));
        }
    }

    match jumped {
        None => {
            if distance > 1 && !piece.is_king() {
                return Err(IllegalMove::NonKingTooFar);
            }
            Ok(CapturePath::EMPTY)
        }
        Some((sq, to_jumped)) => {
            if to_jumped != 1 && !piece.is_king() {
                return Err(IllegalMove::AdjacentJumpOnly);
            }
            if distance - to_jumped != 1 {
                return Err(IllegalMove::OneSquareBehindOnly);
            }
            Ok(CapturePath(Some(sq)))
        }
    }
}

/// Return `true` if the move is legal and jumps a piece.
pub fn is_capture(board: &Board, player: Color, start: Square, end: Square) -> bool {
    matches!(validate(board, player, start, end), Ok(path) if !path.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{CapturePath, is_capture, validate};
    use crate::board::Board;
    use crate::color::Color;
    use crate::error::IllegalMove;
    use crate::square::Square;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    fn board(layout: &str) -> Board {
        layout.parse().unwrap()
    }

    #[test]
    fn empty_start() {
        let b = Board::starting_position();
        assert_eq!(
            validate(&b, Color::Light, sq(4, 3), sq(3, 2)),
            Err(IllegalMove::NoPieceAtStart)
        );
    }

    #[test]
    fn wrong_owner() {
        let b = Board::starting_position();
        assert_eq!(
            validate(&b, Color::Light, sq(2, 1), sq(3, 2)),
            Err(IllegalMove::NotYourTurn { current: Color::Light })
        );
    }

    #[test]
    fn not_diagonal() {
        let b = Board::starting_position();
        assert_eq!(
            validate(&b, Color::Light, sq(5, 0), sq(4, 0)),
            Err(IllegalMove::NotDiagonal)
        );
        assert_eq!(
            validate(&b, Color::Light, sq(5, 0), sq(3, 1)),
            Err(IllegalMove::NotDiagonal)
        );
    }

    #[test]
    fn zero_length_move_is_not_diagonal() {
        let b = board("8/8/8/8/3L4/8/8/8");
        assert_eq!(
            validate(&b, Color::Light, sq(4, 3), sq(4, 3)),
            Err(IllegalMove::NotDiagonal)
        );
    }

    #[test]
    fn single_step_forward() {
        let b = Board::starting_position();
        assert_eq!(validate(&b, Color::Light, sq(5, 0), sq(4, 1)), Ok(CapturePath::EMPTY));
        assert_eq!(validate(&b, Color::Dark, sq(2, 1), sq(3, 0)), Ok(CapturePath::EMPTY));
    }

    #[test]
    fn men_cannot_move_backward() {
        let b = board("8/8/8/2d5/3l4/8/8/8");
        assert_eq!(
            validate(&b, Color::Light, sq(4, 3), sq(5, 4)),
            Err(IllegalMove::WrongDirection { color: Color::Light })
        );
        assert_eq!(
            validate(&b, Color::Dark, sq(3, 2), sq(2, 1)),
            Err(IllegalMove::WrongDirection { color: Color::Dark })
        );
    }

    #[test]
    fn backward_beats_occupied_destination() {
        // (5,4) is occupied, but direction is checked first
        let b = board("8/8/8/8/3l4/4l3/8/8");
        assert_eq!(
            validate(&b, Color::Light, sq(4, 3), sq(5, 4)),
            Err(IllegalMove::WrongDirection { color: Color::Light })
        );
    }

    #[test]
    fn kings_move_backward() {
        let b = board("8/8/8/8/3L4/8/8/8");
        assert_eq!(validate(&b, Color::Light, sq(4, 3), sq(5, 4)), Ok(CapturePath::EMPTY));
    }

    #[test]
    fn destination_occupied() {
        let b = Board::starting_position();
        assert_eq!(
            validate(&b, Color::Light, sq(6, 1), sq(5, 2)),
            Err(IllegalMove::DestinationOccupied)
        );
    }

    #[test]
    fn man_too_far() {
        let b = Board::starting_position();
        assert_eq!(
            validate(&b, Color::Light, sq(5, 0), sq(3, 2)),
            Err(IllegalMove::NonKingTooFar)
        );
    }

    #[test]
    fn man_captures_adjacent() {
        let b = board("8/8/1d6/2l5/8/8/8/8");
        let path = validate(&b, Color::Dark, sq(2, 1), sq(4, 3)).unwrap();
        assert_eq!(path.captured(), Some(sq(3, 2)));
        assert_eq!(path.len(), 1);
        assert!(is_capture(&b, Color::Dark, sq(2, 1), sq(4, 3)));
    }

    #[test]
    fn same_color_piece_can_be_jumped() {
        let b = board("8/8/1d6/2d5/8/8/8/8");
        let path = validate(&b, Color::Dark, sq(2, 1), sq(4, 3)).unwrap();
        assert_eq!(path.captured(), Some(sq(3, 2)));
    }

    #[test]
    fn man_cannot_jump_distant_piece() {
        let b = board("1d6/8/3l4/8/8/8/8/8");
        assert_eq!(
            validate(&b, Color::Dark, sq(0, 1), sq(3, 4)),
            Err(IllegalMove::AdjacentJumpOnly)
        );
    }

    #[test]
    fn capture_must_land_directly_behind() {
        let b = board("8/8/8/8/5L2/4d3/8/8");
        assert_eq!(
            validate(&b, Color::Light, sq(4, 5), sq(7, 2)),
            Err(IllegalMove::OneSquareBehindOnly)
        );
    }

    #[test]
    fn king_captures_from_afar() {
        let b = board("8/6L1/8/8/3d4/8/8/8");
        let path = validate(&b, Color::Light, sq(1, 6), sq(5, 2)).unwrap();
        assert_eq!(path.captured(), Some(sq(4, 3)));
    }

    #[test]
    fn king_slides_any_distance() {
        let b = board("8/8/8/8/8/8/8/L7");
        let path = validate(&b, Color::Light, sq(7, 0), sq(0, 7)).unwrap();
        assert!(path.is_empty());
        assert!(!is_capture(&b, Color::Light, sq(7, 0), sq(0, 7)));
    }

    #[test]
    fn two_pieces_on_path() {
        let b = board("8/8/8/8/3d4/8/1d6/L7");
        assert_eq!(
            validate(&b, Color::Light, sq(7, 0), sq(2, 5)),
            Err(IllegalMove::CantJumpMultiple)
        );

        let b = board("8/8/8/8/3d4/2d5/1l6/8");
        assert_eq!(
            validate(&b, Color::Light, sq(6, 1), sq(3, 4)),
            Err(IllegalMove::CantJumpMultiple)
        );
    }
}
