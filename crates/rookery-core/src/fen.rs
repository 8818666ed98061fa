//! FEN parsing and serialization for [`Board`] placements and full [`GameState`]s.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::FenError;
use crate::file::File;
use crate::game_state::GameState;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::rank::Rank;
use crate::square::Square;

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Board {
    /// Parse the piece-placement field of a FEN string (`"8/8/.../4K3"`).
    ///
    /// Only the layout is checked here, not king counts or pawn ranks.
    pub fn from_placement(placement: &str) -> Result<Board, FenError> {
        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != Rank::COUNT {
            return Err(FenError::WrongRankCount { found: rows.len() });
        }

        let mut board = Board::empty();
        // FEN lists rank 8 first
        for (rank_index, (row, rank)) in rows.iter().zip(Rank::ALL.into_iter().rev()).enumerate() {
            let mut file_index = 0usize;
            for c in row.chars() {
                if let Some(skip) = c.to_digit(10) {
                    if !(1..=8).contains(&skip) {
                        return Err(FenError::InvalidPieceChar { character: c });
                    }
                    file_index += skip as usize;
                    continue;
                }
                let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
                let file = File::from_index(file_index as u8).ok_or(FenError::BadRankLength {
                    rank_index,
                    length: file_index + 1,
                })?;
                board.put(Square::new(file, rank), piece);
                file_index += 1;
            }
            if file_index != File::COUNT {
                return Err(FenError::BadRankLength {
                    rank_index,
                    length: file_index,
                });
            }
        }
        Ok(board)
    }

    /// The piece-placement field of FEN for this board.
    pub fn placement_fen(&self) -> String {
        let mut out = String::with_capacity(71);
        for rank in Rank::ALL.into_iter().rev() {
            let mut empty = 0u8;
            for file in File::ALL {
                match self.get(Square::new(file, rank)) {
                    Some(piece) => {
                        if empty > 0 {
                            out.push(char::from(b'0' + empty));
                            empty = 0;
                        }
                        out.push(piece.fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push(char::from(b'0' + empty));
            }
            if rank != Rank::R1 {
                out.push('/');
            }
        }
        out
    }
}

fn parse_counter(field: &'static str, text: &str) -> Result<u32, FenError> {
    text.parse::<u32>().map_err(|_| FenError::InvalidMoveCounter {
        field,
        found: text.to_string(),
    })
}

/// The en passant field, checked against the board.
///
/// The target must be empty, on the rank `side_to_move` captures onto, with
/// an enemy pawn directly behind it and the pawn's start square empty.
fn parse_en_passant(
    text: &str,
    board: &Board,
    side_to_move: Color,
) -> Result<Option<Square>, FenError> {
    if text == "-" {
        return Ok(None);
    }
    let invalid = || FenError::InvalidEnPassant {
        found: text.to_string(),
    };
    let target = Square::from_algebraic(text).map_err(|_| invalid())?;
    let them = side_to_move.flip();
    let pushed_from = target.offset(0, side_to_move.forward());
    let pushed_to = target.offset(0, -side_to_move.forward());

    let playable = target.rank() == Rank::en_passant_rank(side_to_move)
        && !board.is_occupied(target)
        && pushed_from.is_some_and(|sq| !board.is_occupied(sq))
        && pushed_to.and_then(|sq| board.get(sq)) == Some(Piece::new(PieceKind::Pawn, them));
    if !playable {
        return Err(invalid());
    }
    Ok(Some(target))
}

impl GameState {
    /// Parse a six-field FEN string. The placement must be playable
    /// (one king per side, no pawns on a back rank).
    ///
    /// The loaded position is the first entry of the position history.
    pub fn from_fen(fen: &str) -> Result<GameState, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        let [placement, active, castling, en_passant, halfmove, fullmove] = fields[..] else {
            return Err(FenError::WrongFieldCount { found: fields.len() });
        };

        let board = Board::from_placement(placement)?;
        board.validate()?;

        let side_to_move = match active {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidColor {
                    found: other.to_string(),
                });
            }
        };
        let castling = CastleRights::from_fen(castling)?;
        let en_passant = parse_en_passant(en_passant, &board, side_to_move)?;
        let halfmove_clock = parse_counter("halfmove clock", halfmove)?;
        let fullmove_number = parse_counter("fullmove number", fullmove)?;

        Ok(GameState::from_parts(
            board,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        ))
    }

    /// Serialize the current position as FEN.
    pub fn to_fen(&self) -> String {
        self.to_string()
    }
}

impl FromStr for GameState {
    type Err = FenError;

    fn from_str(fen: &str) -> Result<GameState, FenError> {
        GameState::from_fen(fen)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} ", self.board().placement_fen(), self.side_to_move(), self.castling())?;
        match self.en_passant() {
            Some(sq) => write!(f, "{sq}")?,
            None => f.write_str("-")?,
        }
        write!(f, " {} {}", self.halfmove_clock(), self.fullmove_number())
    }
}
