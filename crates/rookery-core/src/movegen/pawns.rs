//! Pawn move generation.

use crate::attacks::pawn_attacks;
use crate::board::Board;
use crate::chess_move::{Move, PromotionPiece};
use crate::color::Color;
use crate::rank::Rank;
use crate::square::Square;

use super::MoveList;

/// Push a pawn move, expanding it into four promotions on the last rank.
fn push_pawn_move(from: Square, to: Square, us: Color, capture: bool, list: &mut MoveList) {
    if to.rank() == Rank::promotion_rank(us) {
        for promo in PromotionPiece::ALL {
            list.push(Move::new_promotion(from, to, promo, capture));
        }
    } else if capture {
        list.push(Move::new_capture(from, to));
    } else {
        list.push(Move::new(from, to));
    }
}

/// Generate pseudo-legal moves for the `us` pawn on `from`.
pub(super) fn gen_pawn(
    board: &Board,
    from: Square,
    us: Color,
    en_passant: Option<Square>,
    list: &mut MoveList,
) {
    let forward = us.forward();

    // Pushes
    if let Some(single) = from.offset(0, forward) {
        if !board.is_occupied(single) {
            push_pawn_move(from, single, us, false, list);
            if from.rank() == Rank::pawn_rank(us) {
                if let Some(double) = single.offset(0, forward) {
                    if !board.is_occupied(double) {
                        list.push(Move::new(from, double));
                    }
                }
            }
        }
    }

    // Captures, edge files have a single target
    for to in pawn_attacks(us, from) {
        if board.color_on(to) == Some(us.flip()) {
            push_pawn_move(from, to, us, true, list);
        } else if en_passant == Some(to) && !board.is_occupied(to) {
            list.push(Move::new_en_passant(from, to));
        }
    }
}
