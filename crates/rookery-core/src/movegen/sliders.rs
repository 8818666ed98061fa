//! Sliding piece (bishop, rook, queen) move generation.

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::square::Square;

use super::MoveList;

/// Generate pseudo-legal moves for a slider on `from`, stepping along each
/// of `directions` until the edge, a friendly piece (excluded) or an enemy
/// piece (captured).
pub(super) fn gen_slider(
    board: &Board,
    from: Square,
    us: Color,
    directions: &[(i8, i8)],
    list: &mut MoveList,
) {
    for &(df, dr) in directions {
        let mut cursor = from;
        while let Some(to) = cursor.offset(df, dr) {
            match board.color_on(to) {
                None => list.push(Move::new(from, to)),
                Some(color) if color == us => break,
                Some(_) => {
                    list.push(Move::new_capture(from, to));
                    break;
                }
            }
            cursor = to;
        }
    }
}
