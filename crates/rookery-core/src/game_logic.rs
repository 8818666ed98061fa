//! Game termination: checkmate, stalemate and the automatic draw rules.

use std::fmt;

use tracing::debug;

use crate::board::Board;
use crate::color::Color;
use crate::game_state::GameState;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Half-moves without a pawn move or capture after which the game is drawn.
pub const FIFTY_MOVE_HALFMOVES: u32 = 100;

/// Occurrences of one position that draw the game.
pub const REPETITION_COUNT: usize = 3;

/// Where the side to move stands. Exactly one applies to any position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Normal,
    Check,
    Checkmate,
    Stalemate,
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    WhiteWins,
    BlackWins,
    Draw,
}

impl GameResult {
    /// The result string used in game records: `1-0`, `0-1` or `1/2-1/2`.
    pub const fn as_str(self) -> &'static str {
        match self {
            GameResult::WhiteWins => "1-0",
            GameResult::BlackWins => "0-1",
            GameResult::Draw => "1/2-1/2",
        }
    }

    /// The result when `color` has won.
    pub const fn win_for(color: Color) -> GameResult {
        match color {
            Color::White => GameResult::WhiteWins,
            Color::Black => GameResult::BlackWins,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The rule that drew a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawReason {
    Stalemate,
    FiftyMoveRule,
    ThreefoldRepetition,
    InsufficientMaterial,
}

impl fmt::Display for DrawReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DrawReason::Stalemate => "stalemate",
            DrawReason::FiftyMoveRule => "fifty-move rule",
            DrawReason::ThreefoldRepetition => "threefold repetition",
            DrawReason::InsufficientMaterial => "insufficient material",
        })
    }
}

/// The side to move is in check and has no legal move.
pub fn is_checkmate(state: &GameState) -> bool {
    state.is_check() && state.legal_moves().is_empty()
}

/// The side to move is not in check and has no legal move.
pub fn is_stalemate(state: &GameState) -> bool {
    !state.is_check() && state.legal_moves().is_empty()
}

pub fn is_fifty_move_rule(state: &GameState) -> bool {
    state.halfmove_clock() >= FIFTY_MOVE_HALFMOVES
}

/// The current position has occurred at least three times, itself included.
///
/// Positions match on placement, side to move, castling rights and en
/// passant target; move counters are ignored.
pub fn is_threefold_repetition(state: &GameState) -> bool {
    let current = state.position_hash();
    let seen = state
        .position_history()
        .iter()
        .filter(|&&hash| hash == current)
        .count();
    seen >= REPETITION_COUNT
}

/// Neither side has mating material.
///
/// Drawn material: bare kings, a king and one minor piece against a bare
/// king, and king and bishop against king and bishop with both bishops on
/// the same square color. Everything else counts as sufficient, including
/// two knights against a bare king.
pub fn is_insufficient_material(board: &Board) -> bool {
    let non_king = |color: Color| -> Vec<(Square, PieceKind)> {
        board
            .pieces_of(color)
            .filter(|&(_, kind)| kind != PieceKind::King)
            .collect()
    };
    match (non_king(Color::White).as_slice(), non_king(Color::Black).as_slice()) {
        ([], []) => true,
        ([(_, kind)], []) | ([], [(_, kind)]) => kind.is_minor(),
        ([(white_sq, PieceKind::Bishop)], [(black_sq, PieceKind::Bishop)]) => {
            white_sq.is_light() == black_sq.is_light()
        }
        _ => false,
    }
}

/// Classify the position for the side to move.
pub fn game_status(state: &GameState) -> GameStatus {
    let in_check = state.is_check();
    let has_moves = !state.legal_moves().is_empty();
    match (in_check, has_moves) {
        (true, true) => GameStatus::Check,
        (true, false) => GameStatus::Checkmate,
        (false, true) => GameStatus::Normal,
        (false, false) => GameStatus::Stalemate,
    }
}

/// Which draw rule applies, checked in the same order as [`game_result`].
///
/// Returns `None` for checkmate and for games still in progress.
pub fn draw_reason(state: &GameState) -> Option<DrawReason> {
    match game_status(state) {
        GameStatus::Checkmate => return None,
        GameStatus::Stalemate => return Some(DrawReason::Stalemate),
        GameStatus::Normal | GameStatus::Check => {}
    }
    if is_fifty_move_rule(state) {
        Some(DrawReason::FiftyMoveRule)
    } else if is_threefold_repetition(state) {
        Some(DrawReason::ThreefoldRepetition)
    } else if is_insufficient_material(state.board()) {
        Some(DrawReason::InsufficientMaterial)
    } else {
        None
    }
}

/// The outcome of the game, or `None` while it continues.
///
/// Checkmate takes priority, then stalemate, the fifty-move rule,
/// threefold repetition and insufficient material.
pub fn game_result(state: &GameState) -> Option<GameResult> {
    if is_checkmate(state) {
        let winner = state.side_to_move().flip();
        debug!(winner = winner.name(), "checkmate");
        return Some(GameResult::win_for(winner));
    }
    let reason = draw_reason(state)?;
    debug!(reason = %reason, "game drawn");
    Some(GameResult::Draw)
}
