//! Piece placement: an immutable square-to-piece mapping.

use std::fmt;

use crate::bitboard::Bitboard;
use crate::color::Color;
use crate::error::BoardError;
use crate::file::File;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::rank::Rank;
use crate::square::Square;

const BACK_RANK_ORDER: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Which piece, if any, stands on each square.
///
/// `Board` is a small `Copy` value. [`set`](Board::set) and
/// [`remove`](Board::remove) return a new board and leave `self` untouched.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; Square::COUNT],
    /// Occupancy per color, kept in step with `squares`.
    sides: [Bitboard; Color::COUNT],
}

impl Board {
    /// A board with no pieces.
    pub const fn empty() -> Board {
        Board {
            squares: [None; Square::COUNT],
            sides: [Bitboard::EMPTY; Color::COUNT],
        }
    }

    /// The standard starting position.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for color in Color::ALL {
            let back = Rank::back_rank(color);
            let pawns = Rank::pawn_rank(color);
            for (file, kind) in File::ALL.into_iter().zip(BACK_RANK_ORDER) {
                board.put(Square::new(file, back), Piece::new(kind, color));
                board.put(Square::new(file, pawns), Piece::new(PieceKind::Pawn, color));
            }
        }
        board
    }

    /// The piece on `sq`, if any.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// Return a new board with `piece` on `sq`, replacing whatever stood there.
    #[must_use]
    pub fn set(&self, sq: Square, piece: Piece) -> Board {
        let mut board = *self;
        board.put(sq, piece);
        board
    }

    /// Return a new board with `sq` empty.
    #[must_use]
    pub fn remove(&self, sq: Square) -> Board {
        let mut board = *self;
        board.clear(sq);
        board
    }

    pub(crate) fn put(&mut self, sq: Square, piece: Piece) {
        self.clear(sq);
        self.squares[sq.index()] = Some(piece);
        let side = &mut self.sides[piece.color().index()];
        *side = side.with(sq);
    }

    pub(crate) fn clear(&mut self, sq: Square) {
        if let Some(old) = self.squares[sq.index()].take() {
            let side = &mut self.sides[old.color().index()];
            *side = side.without(sq);
        }
    }

    /// Squares occupied by `color`.
    #[inline]
    pub fn side(&self, color: Color) -> Bitboard {
        self.sides[color.index()]
    }

    /// Squares occupied by either color.
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.sides[0] | self.sides[1]
    }

    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.occupied().contains(sq)
    }

    /// The color of the piece on `sq`, if any.
    #[inline]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.get(sq).map(Piece::color)
    }

    /// Squares holding a `kind` piece of `color`.
    pub fn pieces(&self, kind: PieceKind, color: Color) -> Bitboard {
        self.side(color)
            .into_iter()
            .filter(|&sq| self.get(sq).map(Piece::kind) == Some(kind))
            .fold(Bitboard::EMPTY, Bitboard::with)
    }

    /// Every piece of `color` with its square, in square order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, PieceKind)> + '_ {
        self.side(color)
            .into_iter()
            .filter_map(move |sq| self.get(sq).map(|piece| (sq, piece.kind())))
    }

    /// Number of `kind` pieces of `color`.
    pub fn count(&self, kind: PieceKind, color: Color) -> u32 {
        self.pieces(kind, color).count()
    }

    /// The square of `color`'s king, `None` if it has none.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(PieceKind::King, color).lsb()
    }

    /// Check the placement is playable: one king per side, no pawns on a back rank.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let count = self.count(PieceKind::King, color);
            if count != 1 {
                return Err(BoardError::InvalidKingCount {
                    color: color.name(),
                    count,
                });
            }
        }
        for color in Color::ALL {
            for sq in self.pieces(PieceKind::Pawn, color) {
                if matches!(sq.rank(), Rank::R1 | Rank::R8) {
                    return Err(BoardError::PawnOnBackRank { square: sq });
                }
            }
        }
        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self.placement_fen())
    }
}

/// Wrapper for printing a board as an 8x8 grid, White at the bottom.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::ALL.into_iter().rev() {
            write!(f, "{rank}  ")?;
            for file in File::ALL {
                let c = self.0.get(Square::new(file, rank)).map_or('.', Piece::fen_char);
                if file == File::H {
                    writeln!(f, "{c}")?;
                } else {
                    write!(f, "{c} ")?;
                }
            }
        }
        write!(f, "   a b c d e f g h")
    }
}
