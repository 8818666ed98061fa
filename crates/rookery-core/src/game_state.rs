//! The full game position plus its history, advanced one move at a time.

use tracing::trace;

use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::chess_move::Move;
use crate::color::Color;
use crate::error::{MoveError, SanError};
use crate::movegen::MoveList;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::{attacks, san, validator, zobrist};

/// A position with everything needed to continue the game.
///
/// `GameState` is immutable: every transition returns a new state and the
/// old one stays valid, so undo is just keeping the previous value around.
/// Both histories are append-only. `position_history` holds the hash of the
/// starting position followed by one hash per move played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    side_to_move: Color,
    castling: CastleRights,
    en_passant: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
    move_history: Vec<String>,
    position_history: Vec<u64>,
}

impl GameState {
    /// The standard starting position, White to move.
    pub fn new() -> GameState {
        GameState::from_parts(Board::starting_position(), Color::White, CastleRights::ALL, None, 0, 1)
    }

    /// Assemble a state from its position fields, with empty move history.
    ///
    /// The placement is not validated; see [`GameState::from_fen`] for that.
    pub fn from_parts(
        board: Board,
        side_to_move: Color,
        castling: CastleRights,
        en_passant: Option<Square>,
        halfmove_clock: u32,
        fullmove_number: u32,
    ) -> GameState {
        let hash = zobrist::position_hash(&board, side_to_move, castling, en_passant);
        GameState {
            board,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
            move_history: Vec::new(),
            position_history: vec![hash],
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling(&self) -> CastleRights {
        self.castling
    }

    /// The square a pawn may capture onto en passant, set only right after a double push.
    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// Half-moves since the last pawn move or capture.
    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// Starts at 1, incremented after each Black move.
    #[inline]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// SAN of every move played from the starting state, oldest first.
    pub fn move_history(&self) -> &[String] {
        &self.move_history
    }

    /// Position hashes, oldest first; the last entry is the current position.
    pub fn position_history(&self) -> &[u64] {
        &self.position_history
    }

    /// Hash of the current position.
    pub fn position_hash(&self) -> u64 {
        zobrist::position_hash(&self.board, self.side_to_move, self.castling, self.en_passant)
    }

    /// Is the side to move in check?
    pub fn is_check(&self) -> bool {
        attacks::is_in_check(&self.board, self.side_to_move)
    }

    /// Every legal move for the side to move.
    pub fn legal_moves(&self) -> MoveList {
        validator::get_legal_moves(self)
    }

    /// Play `mv` after checking it is legal here.
    ///
    /// The move must match a generated legal move exactly, flags included.
    pub fn play(&self, mv: Move) -> Result<GameState, MoveError> {
        if !self.legal_moves().contains(mv) {
            return Err(MoveError::Illegal { mv });
        }
        Ok(self.apply_move(mv))
    }

    /// Resolve SAN text against this position and play it.
    pub fn play_san(&self, text: &str) -> Result<GameState, SanError> {
        let mv = san::san_to_move(self, text)?;
        Ok(self.apply_move(mv))
    }

    /// Play `mv` without a legality check, recording its SAN in the history.
    ///
    /// Passing a move that is not legal here produces a state that no
    /// longer follows the rules; use [`play`](GameState::play) for untrusted input.
    pub fn apply_move(&self, mv: Move) -> GameState {
        let san = san::move_to_san(self, mv);
        let mut next = self.advance(mv);
        trace!(san = %san, hash = next.position_hash(), "applied move");
        next.move_history.push(san);
        next
    }

    /// The position after `mv`, with every field but the move history updated.
    pub(crate) fn advance(&self, mv: Move) -> GameState {
        let us = self.side_to_move;
        let (from, to) = (mv.from(), mv.to());
        let is_pawn = self.board.get(from).map(Piece::kind) == Some(PieceKind::Pawn);
        let is_capture = mv.is_en_passant() || self.board.color_on(to) == Some(us.flip());

        let board = self.board.apply_move(mv);
        let castling = self.castling.after_move(from, to);
        let en_passant = if is_pawn && from.rank().index().abs_diff(to.rank().index()) == 2 {
            from.offset(0, us.forward())
        } else {
            None
        };
        let halfmove_clock = if is_pawn || is_capture {
            0
        } else {
            self.halfmove_clock + 1
        };
        let fullmove_number = match us {
            Color::White => self.fullmove_number,
            Color::Black => self.fullmove_number + 1,
        };
        let side_to_move = us.flip();

        let mut position_history = self.position_history.clone();
        position_history.push(zobrist::position_hash(&board, side_to_move, castling, en_passant));

        GameState {
            board,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
            move_history: self.move_history.clone(),
            position_history,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}
