//! Attack detection: which squares a side attacks, and whether a king is in check.

mod tables;

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

pub(crate) use self::tables::{DIAGONALS, KING_OFFSETS, ORTHOGONALS};
use self::tables::{BETWEEN, KING_ATTACKS, KNIGHT_ATTACKS, PAWN_ATTACKS};

/// Squares a knight on `sq` attacks.
#[inline]
pub fn knight_attacks(sq: Square) -> Bitboard {
    KNIGHT_ATTACKS[sq.index()]
}

/// Squares a king on `sq` attacks.
#[inline]
pub fn king_attacks(sq: Square) -> Bitboard {
    KING_ATTACKS[sq.index()]
}

/// Squares a `color` pawn on `sq` attacks, whether or not anything stands there.
#[inline]
pub fn pawn_attacks(color: Color, sq: Square) -> Bitboard {
    PAWN_ATTACKS[color.index()][sq.index()]
}

/// Squares strictly between `a` and `b`; empty unless they share a line.
#[inline]
pub fn between(a: Square, b: Square) -> Bitboard {
    BETWEEN[a.index()][b.index()]
}

/// Can a `kind` slider standing on `from` reach `to` along an open board?
fn slides_toward(kind: PieceKind, from: Square, to: Square) -> bool {
    if from == to {
        return false;
    }
    let df = to.file().index().abs_diff(from.file().index());
    let dr = to.rank().index().abs_diff(from.rank().index());
    let orthogonal = df == 0 || dr == 0;
    let diagonal = df == dr;
    match kind {
        PieceKind::Rook => orthogonal,
        PieceKind::Bishop => diagonal,
        PieceKind::Queen => orthogonal || diagonal,
        PieceKind::Pawn | PieceKind::Knight | PieceKind::King => false,
    }
}

/// Return `true` if any piece of `by` attacks `sq`.
///
/// Pawns attack their two forward diagonals even when those squares are
/// empty. A slider's line is blocked by any piece in between, friend or foe;
/// what stands on `sq` itself does not matter.
pub fn is_square_attacked(board: &Board, sq: Square, by: Color) -> bool {
    if (knight_attacks(sq) & board.pieces(PieceKind::Knight, by)).is_nonempty() {
        return true;
    }
    if (king_attacks(sq) & board.pieces(PieceKind::King, by)).is_nonempty() {
        return true;
    }
    // A `by` pawn attacks `sq` from the squares an opposite-colored pawn on `sq` would attack.
    if (pawn_attacks(by.flip(), sq) & board.pieces(PieceKind::Pawn, by)).is_nonempty() {
        return true;
    }

    let occupied = board.occupied();
    board.pieces_of(by).any(|(from, kind)| {
        slides_toward(kind, from, sq) && (between(from, sq) & occupied).is_empty()
    })
}

/// Return `true` if `color`'s king is attacked. A board without that king is never in check.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    board
        .king_square(color)
        .is_some_and(|king| is_square_attacked(board, king, color.flip()))
}
