//! Move values: source, destination, optional promotion, and special-move flags.

use std::fmt;

use crate::castle_rights::CastleSide;
use crate::piece_kind::PieceKind;
use crate::square::Square;

const CAPTURE: u8 = 0b001;
const EN_PASSANT: u8 = 0b010;
const CASTLE: u8 = 0b100;

/// The piece a pawn promotes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PromotionPiece {
    Queen = 0,
    Rook = 1,
    Bishop = 2,
    Knight = 3,
}

impl PromotionPiece {
    /// Promotion choices in generation order.
    pub const ALL: [PromotionPiece; 4] = [
        PromotionPiece::Queen,
        PromotionPiece::Rook,
        PromotionPiece::Bishop,
        PromotionPiece::Knight,
    ];

    /// Convert to the corresponding [`PieceKind`].
    pub const fn to_piece_kind(self) -> PieceKind {
        match self {
            PromotionPiece::Queen => PieceKind::Queen,
            PromotionPiece::Rook => PieceKind::Rook,
            PromotionPiece::Bishop => PieceKind::Bishop,
            PromotionPiece::Knight => PieceKind::Knight,
        }
    }

    /// The promotion matching `kind`; pawns and kings have none.
    pub const fn from_piece_kind(kind: PieceKind) -> Option<PromotionPiece> {
        match kind {
            PieceKind::Queen => Some(PromotionPiece::Queen),
            PieceKind::Rook => Some(PromotionPiece::Rook),
            PieceKind::Bishop => Some(PromotionPiece::Bishop),
            PieceKind::Knight => Some(PromotionPiece::Knight),
            PieceKind::Pawn | PieceKind::King => None,
        }
    }

    /// Uppercase SAN letter (`Q`, `R`, `B`, `N`).
    pub const fn san_letter(self) -> char {
        match self {
            PromotionPiece::Queen => 'Q',
            PromotionPiece::Rook => 'R',
            PromotionPiece::Bishop => 'B',
            PromotionPiece::Knight => 'N',
        }
    }

    /// Lowercase UCI suffix.
    pub const fn uci_char(self) -> char {
        self.san_letter().to_ascii_lowercase()
    }
}

/// A move. Equality and hashing cover every field, flags included.
///
/// Moves are produced by move generation; the flags record what the
/// generator saw (a capture, an en passant capture, a castle) so later
/// stages never need to re-derive them from the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    promotion: Option<PromotionPiece>,
    flags: u8,
}

impl Move {
    /// Placeholder filling unused [`MoveList`](crate::MoveList) slots. Never generated.
    pub(crate) const NULL: Move = Move::new(Square::A1, Square::A1);

    /// A quiet move: no capture, no special rule.
    pub const fn new(from: Square, to: Square) -> Move {
        Move { from, to, promotion: None, flags: 0 }
    }

    /// A move that captures the piece standing on `to`.
    pub const fn new_capture(from: Square, to: Square) -> Move {
        Move { from, to, promotion: None, flags: CAPTURE }
    }

    /// A pawn move onto the last rank, capturing or not.
    pub const fn new_promotion(
        from: Square,
        to: Square,
        promo: PromotionPiece,
        capture: bool,
    ) -> Move {
        Move {
            from,
            to,
            promotion: Some(promo),
            flags: if capture { CAPTURE } else { 0 },
        }
    }

    /// An en passant capture onto the target square `to`.
    pub const fn new_en_passant(from: Square, to: Square) -> Move {
        Move { from, to, promotion: None, flags: CAPTURE | EN_PASSANT }
    }

    /// A castle, given as the king's source and destination.
    pub const fn new_castle(king_from: Square, king_to: Square) -> Move {
        Move { from: king_from, to: king_to, promotion: None, flags: CASTLE }
    }

    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    #[inline]
    pub const fn promotion(self) -> Option<PromotionPiece> {
        self.promotion
    }

    #[inline]
    pub const fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }

    /// `true` for captures, en passant included.
    #[inline]
    pub const fn is_capture(self) -> bool {
        self.flags & CAPTURE != 0
    }

    #[inline]
    pub const fn is_en_passant(self) -> bool {
        self.flags & EN_PASSANT != 0
    }

    #[inline]
    pub const fn is_castle(self) -> bool {
        self.flags & CASTLE != 0
    }

    /// `true` for a castle toward the h-file.
    #[inline]
    pub fn is_kingside_castle(self) -> bool {
        self.is_castle() && self.to.file() > self.from.file()
    }

    /// The wing of a castle, `None` for every other move.
    pub fn castle_side(self) -> Option<CastleSide> {
        if !self.is_castle() {
            None
        } else if self.is_kingside_castle() {
            Some(CastleSide::KingSide)
        } else {
            Some(CastleSide::QueenSide)
        }
    }

    /// Coordinate notation, e.g. `e2e4` or `e7e8q`.
    pub fn to_uci(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.uci_char())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self}")?;
        if self.is_capture() {
            write!(f, " capture")?;
        }
        if self.is_en_passant() {
            write!(f, " en-passant")?;
        }
        if self.is_castle() {
            write!(f, " castle")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{Move, PromotionPiece};
    use crate::castle_rights::CastleSide;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    #[test]
    fn quiet_move_flags() {
        let mv = Move::new(Square::E2, Square::E4);
        assert_eq!(mv.from(), Square::E2);
        assert_eq!(mv.to(), Square::E4);
        assert_eq!(mv.promotion(), None);
        assert!(!mv.is_capture());
        assert!(!mv.is_en_passant());
        assert!(!mv.is_castle());
    }

    #[test]
    fn en_passant_is_a_capture() {
        let mv = Move::new_en_passant(Square::E5, Square::D6);
        assert!(mv.is_capture());
        assert!(mv.is_en_passant());
        assert!(!mv.is_castle());
    }

    #[test]
    fn castle_sides() {
        assert!(Move::new_castle(Square::E1, Square::G1).is_kingside_castle());
        assert!(!Move::new_castle(Square::E8, Square::C8).is_kingside_castle());
        assert!(!Move::new(Square::E1, Square::G1).is_kingside_castle());
        assert_eq!(
            Move::new_castle(Square::E8, Square::C8).castle_side(),
            Some(CastleSide::QueenSide)
        );
        assert_eq!(Move::new(Square::E1, Square::G1).castle_side(), None);
    }

    #[test]
    fn uci_display() {
        assert_eq!(Move::new(Square::E2, Square::E4).to_uci(), "e2e4");
        let promo = Move::new_promotion(Square::E7, Square::E8, PromotionPiece::Queen, false);
        assert_eq!(promo.to_string(), "e7e8q");
        let under = Move::new_promotion(Square::B7, Square::A8, PromotionPiece::Knight, true);
        assert_eq!(under.to_string(), "b7a8n");
    }

    #[test]
    fn equality_includes_flags() {
        let quiet = Move::new(Square::D4, Square::E5);
        let capture = Move::new_capture(Square::D4, Square::E5);
        assert_ne!(quiet, capture);

        let mut set = HashSet::new();
        set.insert(quiet);
        set.insert(Move::new(Square::D4, Square::E5));
        set.insert(capture);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn promotion_piece_kinds() {
        for promo in PromotionPiece::ALL {
            assert_eq!(PromotionPiece::from_piece_kind(promo.to_piece_kind()), Some(promo));
        }
        assert_eq!(PromotionPiece::from_piece_kind(PieceKind::King), None);
        assert_eq!(PromotionPiece::ALL[0], PromotionPiece::Queen);
    }
}
