//! Standard Algebraic Notation: rendering moves as text and resolving text to moves.

use tracing::debug;

use crate::castle_rights::CastleSide;
use crate::chess_move::{Move, PromotionPiece};
use crate::error::SanError;
use crate::file::File;
use crate::game_logic::is_checkmate;
use crate::game_state::GameState;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::rank::Rank;
use crate::square::Square;

/// SAN text broken into its grammar parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SanToken {
    Castle(CastleSide),
    Regular {
        piece: PieceKind,
        file: Option<File>,
        rank: Option<Rank>,
        to: Square,
        promotion: Option<PromotionPiece>,
    },
}

/// Parse `[KQRBN]? [a-h]? [1-8]? x? [a-h][1-8] (=[QRBN])?` or a castling token.
///
/// The destination and promotion have fixed width, so the text is consumed
/// from the end first and the optional prefix parts read left to right.
fn parse(san: &str) -> Option<SanToken> {
    match san {
        "O-O" | "0-0" => return Some(SanToken::Castle(CastleSide::KingSide)),
        "O-O-O" | "0-0-0" => return Some(SanToken::Castle(CastleSide::QueenSide)),
        _ => {}
    }

    let mut rest = san.as_bytes();

    let promotion = match rest {
        [head @ .., b'=', letter] => {
            rest = head;
            let kind = PieceKind::from_san_letter(char::from(*letter))?;
            Some(PromotionPiece::from_piece_kind(kind)?)
        }
        _ => None,
    };

    let [head @ .., file, rank] = rest else {
        return None;
    };
    let to = Square::new(File::from_char(char::from(*file))?, Rank::from_char(char::from(*rank))?);
    rest = head;

    // Capture marker, accepted but not checked
    if let [head @ .., b'x'] = rest {
        rest = head;
    }

    let piece = match rest {
        [letter, tail @ ..] if letter.is_ascii_uppercase() => {
            rest = tail;
            PieceKind::from_san_letter(char::from(*letter))?
        }
        _ => PieceKind::Pawn,
    };

    let file = match rest {
        [c, tail @ ..] if File::from_char(char::from(*c)).is_some() => {
            rest = tail;
            File::from_char(char::from(*c))
        }
        _ => None,
    };
    let rank = match rest {
        [c, tail @ ..] if Rank::from_char(char::from(*c)).is_some() => {
            rest = tail;
            Rank::from_char(char::from(*c))
        }
        _ => None,
    };

    if !rest.is_empty() {
        return None;
    }
    Some(SanToken::Regular { piece, file, rank, to, promotion })
}

/// Render `mv` in SAN for the position `state`, with a `+` or `#` suffix.
///
/// `mv` should be legal in `state`. A move from an empty square falls back
/// to coordinate notation.
pub fn move_to_san(state: &GameState, mv: Move) -> String {
    let mut san = san_without_suffix(state, mv);
    let next = state.advance(mv);
    if next.is_check() {
        san.push(if is_checkmate(&next) { '#' } else { '+' });
    }
    san
}

fn san_without_suffix(state: &GameState, mv: Move) -> String {
    if let Some(side) = mv.castle_side() {
        return side.san().to_string();
    }
    let board = state.board();
    let Some(piece) = board.get(mv.from()) else {
        return mv.to_uci();
    };
    let capture = mv.is_capture() || board.is_occupied(mv.to());

    let mut san = String::with_capacity(8);
    match piece.kind().san_letter() {
        None => {
            if capture {
                san.push(mv.from().file().to_char());
                san.push('x');
            }
            san.push_str(&mv.to().to_string());
            if let Some(promo) = mv.promotion() {
                san.push('=');
                san.push(promo.san_letter());
            }
        }
        Some(letter) => {
            san.push(letter);
            san.push_str(&disambiguation(state, mv, piece.kind()));
            if capture {
                san.push('x');
            }
            san.push_str(&mv.to().to_string());
        }
    }
    san
}

/// The file, rank or full square needed to tell `mv` apart from other
/// legal moves of the same piece kind to the same square.
fn disambiguation(state: &GameState, mv: Move, kind: PieceKind) -> String {
    let board = state.board();
    let from = mv.from();
    let rivals: Vec<Square> = state
        .legal_moves()
        .iter()
        .filter(|m| m.to() == mv.to() && m.from() != from)
        .filter(|m| board.get(m.from()).map(Piece::kind) == Some(kind))
        .map(|m| m.from())
        .collect();

    if rivals.is_empty() {
        String::new()
    } else if rivals.iter().all(|sq| sq.file() != from.file()) {
        from.file().to_string()
    } else if rivals.iter().all(|sq| sq.rank() != from.rank()) {
        from.rank().to_string()
    } else {
        from.to_string()
    }
}

/// Resolve SAN `text` to the matching legal move in `state`.
///
/// A trailing `+` or `#` is ignored, as is the capture marker. Text that
/// fits the grammar but names no legal move, or names more than one, is an
/// error; an under-specified move is never guessed.
pub fn san_to_move(state: &GameState, text: &str) -> Result<Move, SanError> {
    let san = text.trim_end_matches(['+', '#']);
    let Some(token) = parse(san) else {
        debug!(san = text, "malformed SAN");
        return Err(SanError::Malformed { san: text.to_string() });
    };
    let result = resolve(state, text, token);
    if let Err(err) = &result {
        debug!(san = text, error = %err, "SAN did not resolve");
    }
    result
}

/// Find the single legal move `token` describes.
fn resolve(state: &GameState, text: &str, token: SanToken) -> Result<Move, SanError> {
    let legal = state.legal_moves();
    let (piece, file, rank, to, promotion) = match token {
        SanToken::Castle(side) => {
            return legal
                .iter()
                .copied()
                .find(|m| m.castle_side() == Some(side))
                .ok_or_else(|| SanError::NoLegalMove { san: text.to_string() });
        }
        SanToken::Regular { piece, file, rank, to, promotion } => (piece, file, rank, to, promotion),
    };

    let board = state.board();
    let reaching: Vec<Move> = legal
        .iter()
        .copied()
        .filter(|m| !m.is_castle() && m.to() == to)
        .filter(|m| board.get(m.from()).map(Piece::kind) == Some(piece))
        .filter(|m| file.is_none_or(|f| m.from().file() == f))
        .filter(|m| rank.is_none_or(|r| m.from().rank() == r))
        .collect();
    let matching: Vec<Move> = reaching
        .iter()
        .copied()
        .filter(|m| m.promotion() == promotion)
        .collect();

    match matching.as_slice() {
        [mv] => Ok(*mv),
        [] if promotion.is_none() && reaching.iter().any(|m| m.is_promotion()) => {
            Err(SanError::MissingPromotion { san: text.to_string() })
        }
        [] => Err(SanError::NoLegalMove { san: text.to_string() }),
        several => {
            let mut candidates: Vec<Square> = several.iter().map(|m| m.from()).collect();
            candidates.sort();
            candidates.dedup();
            Err(SanError::Ambiguous {
                san: text.to_string(),
                candidates,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(fen: &str) -> GameState {
        fen.parse().unwrap()
    }

    #[test]
    fn parse_grammar() {
        assert_eq!(parse("O-O"), Some(SanToken::Castle(CastleSide::KingSide)));
        assert_eq!(parse("0-0-0"), Some(SanToken::Castle(CastleSide::QueenSide)));
        assert_eq!(
            parse("Nbxd7"),
            Some(SanToken::Regular {
                piece: PieceKind::Knight,
                file: Some(File::B),
                rank: None,
                to: Square::D7,
                promotion: None,
            })
        );
        assert_eq!(
            parse("exf8=N"),
            Some(SanToken::Regular {
                piece: PieceKind::Pawn,
                file: Some(File::E),
                rank: None,
                to: Square::F8,
                promotion: Some(PromotionPiece::Knight),
            })
        );
        assert!(matches!(
            parse("Qh4e1"),
            Some(SanToken::Regular { file: Some(File::H), rank: Some(Rank::R4), .. })
        ));
        assert!(matches!(parse("R1a3"), Some(SanToken::Regular { file: None, rank: Some(Rank::R1), .. })));
    }

    #[test]
    fn parse_rejects_malformed() {
        for bad in ["", "e9", "i4", "Pe4", "e8=K", "e8=", "Nf", "xx", "e4e5e6", "O-O-O-O", "nf3", "é4"] {
            assert_eq!(parse(bad), None, "{bad:?} should not parse");
        }
    }

    #[test]
    fn pawn_moves() {
        let s = GameState::new();
        assert_eq!(move_to_san(&s, Move::new(Square::E2, Square::E4)), "e4");
        assert_eq!(san_to_move(&s, "e4"), Ok(Move::new(Square::E2, Square::E4)));
        assert_eq!(san_to_move(&s, "Nf3"), Ok(Move::new(Square::G1, Square::F3)));
    }

    #[test]
    fn pawn_capture_and_en_passant() {
        let s = state("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
        let ep = Move::new_en_passant(Square::E5, Square::D6);
        assert_eq!(move_to_san(&s, ep), "exd6");
        assert_eq!(san_to_move(&s, "exd6"), Ok(ep));
    }

    #[test]
    fn promotion_text() {
        let s = state("3r4/4P3/8/8/8/8/8/k3K3 w - - 0 1");
        let push = Move::new_promotion(Square::E7, Square::E8, PromotionPiece::Queen, false);
        assert_eq!(move_to_san(&s, push), "e8=Q");
        let capture = Move::new_promotion(Square::E7, Square::D8, PromotionPiece::Knight, true);
        assert_eq!(move_to_san(&s, capture), "exd8=N");
        assert_eq!(san_to_move(&s, "exd8=N"), Ok(capture));
        assert_eq!(
            san_to_move(&s, "e8"),
            Err(SanError::MissingPromotion { san: "e8".to_string() })
        );
    }

    #[test]
    fn castling_text() {
        let s = state("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        assert_eq!(move_to_san(&s, Move::new_castle(Square::E1, Square::G1)), "O-O");
        assert_eq!(move_to_san(&s, Move::new_castle(Square::E1, Square::C1)), "O-O-O");
        assert_eq!(san_to_move(&s, "0-0"), Ok(Move::new_castle(Square::E1, Square::G1)));
        assert_eq!(san_to_move(&s, "O-O-O"), Ok(Move::new_castle(Square::E1, Square::C1)));
        // A plain king step never means castling
        assert_eq!(
            san_to_move(&s, "Kg1"),
            Err(SanError::NoLegalMove { san: "Kg1".to_string() })
        );
    }

    #[test]
    fn castling_unavailable() {
        let s = GameState::new();
        assert_eq!(san_to_move(&s, "O-O"), Err(SanError::NoLegalMove { san: "O-O".to_string() }));
    }

    #[test]
    fn check_and_mate_suffixes() {
        let s = state("4k3/8/8/8/8/8/8/R3K3 w - - 0 1");
        assert_eq!(move_to_san(&s, Move::new(Square::A1, Square::A8)), "Ra8+");

        let s = state("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1");
        assert_eq!(move_to_san(&s, Move::new(Square::A1, Square::A8)), "Ra8#");
        assert_eq!(san_to_move(&s, "Ra8#"), Ok(Move::new(Square::A1, Square::A8)));
        assert_eq!(san_to_move(&s, "Ra8"), Ok(Move::new(Square::A1, Square::A8)));
    }

    #[test]
    fn disambiguation_by_file_rank_and_square() {
        let s = state("8/8/8/7k/8/Q7/4K3/Q1Q5 w - - 0 1");
        assert_eq!(move_to_san(&s, Move::new(Square::A1, Square::B2)), "Qa1b2");
        assert_eq!(move_to_san(&s, Move::new(Square::C1, Square::B2)), "Qcb2");
        assert_eq!(move_to_san(&s, Move::new(Square::A3, Square::B2)), "Q3b2");

        assert_eq!(san_to_move(&s, "Qa1b2"), Ok(Move::new(Square::A1, Square::B2)));
        assert_eq!(san_to_move(&s, "Q3b2"), Ok(Move::new(Square::A3, Square::B2)));
        assert_eq!(
            san_to_move(&s, "Qb2"),
            Err(SanError::Ambiguous {
                san: "Qb2".to_string(),
                candidates: vec![Square::A1, Square::C1, Square::A3],
            })
        );
        assert!(matches!(san_to_move(&s, "Qab2"), Err(SanError::Ambiguous { .. })));
    }

    #[test]
    fn capture_marker_is_optional() {
        let s = state("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1");
        let capture = Move::new_capture(Square::E4, Square::D5);
        assert_eq!(move_to_san(&s, capture), "exd5");
        assert_eq!(san_to_move(&s, "exd5"), Ok(capture));
        assert_eq!(san_to_move(&s, "ed5"), Ok(capture));
    }

    #[test]
    fn resolution_errors() {
        let s = GameState::new();
        assert_eq!(san_to_move(&s, "e5"), Err(SanError::NoLegalMove { san: "e5".to_string() }));
        assert_eq!(san_to_move(&s, "Qd4"), Err(SanError::NoLegalMove { san: "Qd4".to_string() }));
        assert_eq!(san_to_move(&s, "e4=Q"), Err(SanError::NoLegalMove { san: "e4=Q".to_string() }));
        assert_eq!(san_to_move(&s, "Zz9"), Err(SanError::Malformed { san: "Zz9".to_string() }));
    }
}
