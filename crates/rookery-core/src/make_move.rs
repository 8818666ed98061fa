//! Piece relocation for a single move, producing a new board.

use crate::board::Board;
use crate::chess_move::Move;
use crate::piece::Piece;
use crate::square::Square;

impl Board {
    /// Return the board after `mv`. Copy-make: `self` is not modified.
    ///
    /// Only pieces move here: the source is emptied, the destination receives
    /// the mover (or its promotion), an en passant victim on
    /// `(to.file, from.rank)` is removed, and a castling rook jumps to the
    /// king's inner side. No legality check is made. If the source square is
    /// empty the board is returned unchanged.
    #[must_use]
    pub fn apply_move(&self, mv: Move) -> Board {
        let mut b = *self;
        let (from, to) = (mv.from(), mv.to());
        let Some(piece) = b.get(from) else {
            return b;
        };

        b.clear(from);
        if mv.is_en_passant() {
            b.clear(Square::new(to.file(), from.rank()));
        }
        let placed = match mv.promotion() {
            Some(promo) => Piece::new(promo.to_piece_kind(), piece.color()),
            None => piece,
        };
        b.put(to, placed);

        if let Some(side) = mv.castle_side() {
            let color = piece.color();
            let rook_from = side.rook_from(color);
            if let Some(rook) = b.get(rook_from) {
                b.clear(rook_from);
                b.put(side.rook_to(color), rook);
            }
        }
        b
    }
}
