//! Pseudo-legal move generation: movement rules only, king safety is left to the validator.

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::attacks::{DIAGONALS, KING_OFFSETS, ORTHOGONALS};
use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use self::king::gen_king;
use self::knights::gen_knight;
use self::pawns::gen_pawn;
use self::sliders::gen_slider;

/// Stack-allocated buffer for generated moves. Capacity 256 covers the theoretical max of 218.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; 256],
    len: u16,
}

impl MoveList {
    /// Create an empty move list.
    pub fn new() -> MoveList {
        MoveList {
            moves: [Move::NULL; 256],
            len: 0,
        }
    }

    /// Push a move onto the list.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        debug_assert!((self.len as usize) < 256);
        self.moves[self.len as usize] = mv;
        self.len += 1;
    }

    /// Return the number of moves in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Return `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len as usize]
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    pub fn contains(&self, mv: Move) -> bool {
        self.as_slice().contains(&mv)
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;
    #[inline]
    fn index(&self, index: usize) -> &Move {
        &self.as_slice()[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl FromIterator<Move> for MoveList {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> MoveList {
        let mut list = MoveList::new();
        for mv in iter {
            list.push(mv);
        }
        list
    }
}

/// Push a move from `from` to each square in `targets`, skipping friendly
/// pieces and flagging enemy-occupied squares as captures.
fn push_targets(board: &Board, from: Square, us: Color, targets: Bitboard, list: &mut MoveList) {
    let enemy = board.side(us.flip());
    for to in targets & !board.side(us) {
        if enemy.contains(to) {
            list.push(Move::new_capture(from, to));
        } else {
            list.push(Move::new(from, to));
        }
    }
}

/// Generate the pseudo-legal moves of the piece standing on `from`.
///
/// `en_passant` is the square a pawn may capture onto by en passant, and
/// `castling` the rights still held. An empty square yields nothing.
pub fn generate_piece_moves(
    board: &Board,
    from: Square,
    en_passant: Option<Square>,
    castling: CastleRights,
    list: &mut MoveList,
) {
    let Some(piece) = board.get(from) else {
        return;
    };
    let us = piece.color();
    match piece.kind() {
        PieceKind::Pawn => gen_pawn(board, from, us, en_passant, list),
        PieceKind::Knight => gen_knight(board, from, us, list),
        PieceKind::Bishop => gen_slider(board, from, us, &DIAGONALS, list),
        PieceKind::Rook => gen_slider(board, from, us, &ORTHOGONALS, list),
        PieceKind::Queen => gen_slider(board, from, us, &KING_OFFSETS, list),
        PieceKind::King => gen_king(board, from, us, castling, list),
    }
}

/// Generate the pseudo-legal moves of every `us` piece, in square order.
pub fn generate_pseudo_legal(
    board: &Board,
    us: Color,
    en_passant: Option<Square>,
    castling: CastleRights,
) -> MoveList {
    let mut list = MoveList::new();
    for from in board.side(us) {
        generate_piece_moves(board, from, en_passant, castling, &mut list);
    }
    list
}
