//! King step and castling generation.

use crate::attacks::{between, king_attacks};
use crate::board::Board;
use crate::castle_rights::{CastleRights, CastleSide};
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use super::{MoveList, push_targets};

/// Generate pseudo-legal king moves (steps + castling).
///
/// Castling is emitted when the king stands on its home square, the right is
/// held, the rook is on its corner, and every square between them is empty.
/// Whether the king passes through check is decided by the validator.
pub(super) fn gen_king(
    board: &Board,
    from: Square,
    us: Color,
    castling: CastleRights,
    list: &mut MoveList,
) {
    push_targets(board, from, us, king_attacks(from), list);

    if from != CastleSide::king_from(us) {
        return;
    }
    let occupied = board.occupied();
    let rook = Piece::new(PieceKind::Rook, us);
    for side in CastleSide::ALL {
        if !castling.has(us, side) {
            continue;
        }
        let rook_sq = side.rook_from(us);
        if board.get(rook_sq) != Some(rook) {
            continue;
        }
        if (between(from, rook_sq) & occupied).is_empty() {
            list.push(Move::new_castle(from, side.king_to(us)));
        }
    }
}
