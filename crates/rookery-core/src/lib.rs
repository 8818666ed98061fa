//! Core chess rules: board representation, move generation, legality,
//! game termination and standard algebraic notation.

mod attacks;
mod bitboard;
mod board;
mod castle_rights;
mod chess_move;
mod color;
mod error;
mod fen;
mod file;
mod game_logic;
mod game_state;
mod make_move;
mod movegen;
mod perft;
mod piece;
mod piece_kind;
mod rank;
mod san;
mod square;
mod validator;
mod zobrist;

pub use attacks::{between, is_in_check, is_square_attacked, king_attacks, knight_attacks, pawn_attacks};
pub use bitboard::Bitboard;
pub use board::{Board, PrettyBoard};
pub use castle_rights::{CastleRights, CastleSide};
pub use chess_move::{Move, PromotionPiece};
pub use color::Color;
pub use error::{BoardError, FenError, MoveError, SanError, SquareError};
pub use fen::STARTING_FEN;
pub use file::File;
pub use game_logic::{
    DrawReason, FIFTY_MOVE_HALFMOVES, GameResult, GameStatus, REPETITION_COUNT, draw_reason,
    game_result, game_status, is_checkmate, is_fifty_move_rule, is_insufficient_material,
    is_stalemate, is_threefold_repetition,
};
pub use game_state::GameState;
pub use movegen::{MoveList, generate_piece_moves, generate_pseudo_legal};
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use rank::Rank;
pub use san::{move_to_san, san_to_move};
pub use square::Square;
pub use validator::{get_legal_moves, is_move_legal};
pub use zobrist::position_hash;
