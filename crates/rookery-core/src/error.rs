//! Error types for text parsing, board validation, and move resolution.

use crate::chess_move::Move;
use crate::square::Square;

/// Square text that is not a file letter followed by a rank digit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SquareError {
    #[error("invalid square: \"{text}\"")]
    Malformed {
        /// The rejected text.
        text: String,
    },
}

/// Errors that occur when parsing a FEN string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The FEN string does not have exactly 6 space-separated fields.
    #[error("expected 6 FEN fields, found {found}")]
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The piece placement section does not have exactly 8 ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank in the piece placement describes more or fewer than 8 squares.
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength {
        /// Zero-based rank index in FEN order (0 = rank 8).
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar { character: char },
    #[error("invalid active color: \"{found}\"")]
    InvalidColor { found: String },
    #[error("invalid castling character: '{character}'")]
    InvalidCastlingChar { character: char },
    #[error("invalid en passant square: \"{found}\"")]
    InvalidEnPassant { found: String },
    /// A move counter is not a valid number.
    #[error("invalid {field}: \"{found}\"")]
    InvalidMoveCounter {
        /// "halfmove clock" or "fullmove number".
        field: &'static str,
        found: String,
    },
    #[error("invalid board: {source}")]
    InvalidBoard {
        #[from]
        source: BoardError,
    },
}

/// Structural problems found by [`Board::validate`](crate::Board::validate).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: &'static str,
        count: u32,
    },
    #[error("pawn on back rank at {square}")]
    PawnOnBackRank { square: Square },
}

/// Failures resolving SAN text against a position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SanError {
    /// The text does not match the SAN grammar.
    #[error("malformed SAN: \"{san}\"")]
    Malformed { san: String },
    /// Well-formed, but no legal move matches.
    #[error("no legal move matches \"{san}\"")]
    NoLegalMove { san: String },
    /// Two or more legal moves match and the text does not say which.
    #[error("ambiguous move \"{san}\": candidates from {}", format_squares(.candidates))]
    Ambiguous {
        san: String,
        /// Source squares of the matching moves.
        candidates: Vec<Square>,
    },
    /// A pawn reaches the last rank but no promotion piece was named.
    #[error("move \"{san}\" reaches the last rank without a promotion piece")]
    MissingPromotion { san: String },
}

/// A move rejected by [`GameState::play`](crate::GameState::play).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("illegal move {mv} in this position")]
    Illegal { mv: Move },
}

fn format_squares(squares: &[Square]) -> String {
    squares
        .iter()
        .map(Square::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
