//! Continuation search: can the piece that just moved keep going?

use draughts_core::rules::{is_capture, validate};
use draughts_core::{BOARD_SIZE, Board, Square};

/// The four diagonal directions as (row step, col step).
const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Return `true` if the piece on `sq` has a follow-up move that keeps the turn.
///
/// A man probes the four squares two steps away on each diagonal. A king
/// probes every square on its four diagonal rays. Any probe that validates
/// counts, so a king's plain slide is reported as a continuation unless
/// `strict` is set, in which case only probes that jump a piece count.
///
/// Returns `false` for an empty square.
pub fn piece_can_capture(board: &Board, sq: Square, strict: bool) -> bool {
    let Some(piece) = board.piece_at(sq) else {
        return false;
    };
    let player = piece.color();

    let accepts = |target: Square| {
        if strict {
            is_capture(board, player, sq, target)
        } else {
            validate(board, player, sq, target).is_ok()
        }
    };

    if !piece.is_king() {
        return DIAGONALS
            .iter()
            .filter_map(|&(dr, dc)| sq.offset(2 * dr, 2 * dc))
            .any(&accepts);
    }

    (1..BOARD_SIZE as i8).any(|distance| {
        DIAGONALS
            .iter()
            .filter_map(|&(dr, dc)| sq.offset(distance * dr, distance * dc))
            .any(&accepts)
    })
}

#[cfg(test)]
mod tests {
    use super::piece_can_capture;
    use draughts_core::{Board, Square};

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    fn board(layout: &str) -> Board {
        layout.parse().unwrap()
    }

    #[test]
    fn empty_square() {
        assert!(!piece_can_capture(&Board::empty(), sq(3, 2), false));
    }

    #[test]
    fn man_with_jump_available() {
        // dark man (4,3), light man (5,4), (6,5) empty
        let b = board("8/8/8/8/3d4/4l3/8/8");
        assert!(piece_can_capture(&b, sq(4, 3), false));
        assert!(piece_can_capture(&b, sq(4, 3), true));
    }

    #[test]
    fn man_with_blocked_landing() {
        let b = board("8/8/8/8/3d4/4l3/5l2/8");
        assert!(!piece_can_capture(&b, sq(4, 3), false));
    }

    #[test]
    fn man_cannot_jump_backward() {
        // light piece behind the dark man
        let b = board("8/8/8/2l5/3d4/8/8/8");
        assert!(!piece_can_capture(&b, sq(4, 3), false));
    }

    #[test]
    fn man_next_to_edge() {
        let b = board("8/8/8/8/8/8/1d6/l7");
        assert!(!piece_can_capture(&b, sq(6, 1), false));
    }

    #[test]
    fn lone_king_reports_slide() {
        let b = board("8/8/8/8/3D4/8/8/8");
        assert!(piece_can_capture(&b, sq(4, 3), false));
        assert!(!piece_can_capture(&b, sq(4, 3), true));
    }

    #[test]
    fn king_with_distant_capture() {
        // dark king (0,1), light man (3,4), (4,5) empty
        let b = board("1D6/8/8/4l3/8/8/8/8");
        assert!(piece_can_capture(&b, sq(0, 1), true));
    }
}
