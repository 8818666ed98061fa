//! Integration tests for whole games played through the public API.
//!
//! Each scenario starts from a FEN or the initial position, plays SAN moves
//! and checks the resulting state, status and result.

use rookery_core::{
    CastleRights, CastleSide, Color, DrawReason, GameResult, GameState, GameStatus, Move,
    MoveError, Piece, PieceKind, STARTING_FEN, SanError, Square, draw_reason, game_result,
    game_status, is_checkmate, is_insufficient_material, is_stalemate, is_threefold_repetition,
    move_to_san, san_to_move,
};

/// Helper: play a whitespace-separated list of SAN moves.
fn play_line(state: GameState, line: &str) -> GameState {
    line.split_whitespace()
        .fold(state, |s, san| s.play_san(san).unwrap_or_else(|e| panic!("{san}: {e}")))
}

// ── Opening and mates ────────────────────────────────────────────────────────

#[test]
fn twenty_moves_from_start() {
    let state = GameState::new();
    assert_eq!(state.legal_moves().len(), 20);
    assert_eq!(state.to_fen(), STARTING_FEN);
    assert_eq!(game_status(&state), GameStatus::Normal);
}

#[test]
fn fools_mate() {
    let state = play_line(GameState::new(), "f3 e5 g4 Qh4");
    assert!(is_checkmate(&state));
    assert_eq!(game_status(&state), GameStatus::Checkmate);
    assert_eq!(game_result(&state), Some(GameResult::BlackWins));
    assert_eq!(state.move_history(), ["f3", "e5", "g4", "Qh4#"]);
    assert_eq!(state.fullmove_number(), 3);
}

#[test]
fn scholars_mate() {
    let state = play_line(GameState::new(), "e4 e5 Bc4 Nc6 Qh5 Nf6 Qxf7#");
    assert_eq!(game_result(&state), Some(GameResult::WhiteWins));
    assert_eq!(state.move_history().last().map(String::as_str), Some("Qxf7#"));
    assert_eq!(state.halfmove_clock(), 0);
}

// ── Draws ────────────────────────────────────────────────────────────────────

#[test]
fn lone_kings_are_a_draw() {
    let state: GameState = "4k3/8/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
    assert!(is_insufficient_material(state.board()));
    assert_eq!(draw_reason(&state), Some(DrawReason::InsufficientMaterial));
    assert_eq!(game_result(&state), Some(GameResult::Draw));
    assert_eq!(game_status(&state), GameStatus::Normal);
}

#[test]
fn knight_shuffle_threefold() {
    let once = play_line(GameState::new(), "Nf3 Nf6 Ng1 Ng8");
    assert!(!is_threefold_repetition(&once));

    let almost = play_line(once, "Nf3 Nf6 Ng1");
    assert!(!is_threefold_repetition(&almost));
    assert_eq!(game_result(&almost), None);

    let thrice = almost.play_san("Ng8").unwrap();
    assert!(is_threefold_repetition(&thrice));
    assert_eq!(draw_reason(&thrice), Some(DrawReason::ThreefoldRepetition));
    assert_eq!(game_result(&thrice), Some(GameResult::Draw));
    assert_eq!(thrice.position_history().len(), 9);
}

#[test]
fn cornered_king_stalemate() {
    let state: GameState = "k7/2Q5/1K6/8/8/8/8/8 b - - 0 1".parse().unwrap();
    assert!(is_stalemate(&state));
    assert_eq!(game_result(&state), Some(GameResult::Draw));
}

// ── Special moves ────────────────────────────────────────────────────────────

#[test]
fn en_passant_capture_removes_pawn() {
    let state: GameState = "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1".parse().unwrap();
    let next = state.play_san("exd6").unwrap();
    assert_eq!(next.board().get(Square::D5), None);
    assert_eq!(next.board().get(Square::E5), None);
    assert_eq!(
        next.board().get(Square::D6),
        Some(Piece::new(PieceKind::Pawn, Color::White))
    );
    assert_eq!(next.en_passant(), None);
    assert_eq!(next.move_history(), ["exd6"]);
}

#[test]
fn en_passant_window_closes_after_one_move() {
    let state = play_line(GameState::new(), "e4 a6 e5 d5");
    assert_eq!(state.en_passant(), Some(Square::D6));
    let later = play_line(state, "h3 h6");
    assert_eq!(later.en_passant(), None);
    assert!(later.play_san("exd6").is_err());
}

#[test]
fn castling_moves_rook_and_clears_rights() {
    let state: GameState = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1".parse().unwrap();
    let state = state.play_san("O-O").unwrap();
    assert_eq!(state.board().get(Square::G1), Some(Piece::new(PieceKind::King, Color::White)));
    assert_eq!(state.board().get(Square::F1), Some(Piece::new(PieceKind::Rook, Color::White)));
    assert_eq!(state.board().get(Square::H1), None);
    assert!(!state.castling().has(Color::White, CastleSide::KingSide));
    assert!(!state.castling().has(Color::White, CastleSide::QueenSide));

    let state = state.play_san("O-O-O").unwrap();
    assert_eq!(state.board().get(Square::C8), Some(Piece::new(PieceKind::King, Color::Black)));
    assert_eq!(state.board().get(Square::D8), Some(Piece::new(PieceKind::Rook, Color::Black)));
    assert_eq!(state.castling(), CastleRights::NONE);
    assert_eq!(state.move_history(), ["O-O", "O-O-O"]);
}

#[test]
fn rook_move_revokes_one_side() {
    let state = play_line(
        "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1".parse().unwrap(),
        "Rb1",
    );
    assert_eq!(state.to_fen(), "r3k2r/8/8/8/8/8/8/1R2K2R b Kkq - 1 1");
}

#[test]
fn promotion_to_knight_with_check() {
    let state: GameState = "8/4P1k1/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
    let state = state.play_san("e8=N+").unwrap();
    assert_eq!(state.board().get(Square::E8), Some(Piece::new(PieceKind::Knight, Color::White)));
    assert_eq!(state.move_history(), ["e8=N+"]);
    assert_eq!(game_status(&state), GameStatus::Check);
}

// ── Disambiguation ───────────────────────────────────────────────────────────

#[test]
fn rook_file_disambiguation() {
    // The king on e1 blocks the f1 rook, so only one rook reaches d1
    let blocked: GameState = "4k3/8/8/8/8/8/8/R3KR2 w - - 0 1".parse().unwrap();
    let mv = Move::new(Square::A1, Square::D1);
    let played = blocked.play_san("Rad1").unwrap();
    assert_eq!(played.board().get(Square::D1).map(|p| p.kind()), Some(PieceKind::Rook));
    assert_eq!(played.board().get(Square::A1), None);
    assert_eq!(move_to_san(&blocked, mv), "Rd1");

    // With the king out of the way both rooks see d1
    let open: GameState = "4k3/8/8/8/8/8/8/R4R1K w - - 0 1".parse().unwrap();
    assert_eq!(move_to_san(&open, mv), "Rad1");
    assert_eq!(san_to_move(&open, "Rad1"), Ok(mv));
    assert_eq!(
        san_to_move(&open, "Rfd1"),
        Ok(Move::new(Square::F1, Square::D1))
    );
    assert!(matches!(
        san_to_move(&open, "Rd1"),
        Err(SanError::Ambiguous { candidates, .. }) if candidates == [Square::A1, Square::F1]
    ));
}

// ── State semantics ──────────────────────────────────────────────────────────

#[test]
fn playing_leaves_original_untouched() {
    let start = GameState::new();
    let snapshot = start.clone();
    let after = start.play_san("e4").unwrap();

    assert_eq!(start, snapshot);
    assert_eq!(start.to_fen(), STARTING_FEN);
    assert!(start.move_history().is_empty());
    assert_eq!(start.position_history().len(), 1);

    assert_ne!(after, start);
    assert_eq!(after.side_to_move(), Color::Black);
    assert_eq!(after.position_history().len(), 2);
    assert_eq!(after.position_history()[0], start.position_hash());
}

#[test]
fn illegal_move_is_rejected() {
    let state = GameState::new();
    let mv = Move::new(Square::E2, Square::E5);
    assert_eq!(state.play(mv), Err(MoveError::Illegal { mv }));
    assert!(state.play_san("e5").is_err());
    assert!(state.play_san("Ke2").is_err());
}

#[test]
fn counters_follow_moves() {
    let state = play_line(GameState::new(), "Nf3 Nc6 Ng1 Nb8");
    assert_eq!(state.halfmove_clock(), 4);
    assert_eq!(state.fullmove_number(), 3);
    let state = state.play_san("e4").unwrap();
    assert_eq!(state.halfmove_clock(), 0);
    assert_eq!(state.fullmove_number(), 3);
}

#[test]
fn status_is_exclusive() {
    let fens = [
        STARTING_FEN,
        "4k3/8/8/8/8/8/8/4R1K1 b - - 0 1",
        "k7/2Q5/1K6/8/8/8/8/8 b - - 0 1",
        "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3",
    ];
    let expected = [
        GameStatus::Normal,
        GameStatus::Check,
        GameStatus::Stalemate,
        GameStatus::Checkmate,
    ];
    for (fen, want) in fens.iter().zip(expected) {
        let state: GameState = fen.parse().unwrap();
        let flags = [
            state.is_check() && !is_checkmate(&state),
            is_checkmate(&state),
            is_stalemate(&state),
            !state.is_check() && !state.legal_moves().is_empty(),
        ];
        assert_eq!(flags.iter().filter(|&&f| f).count(), 1, "{fen}");
        assert_eq!(game_status(&state), want, "{fen}");
    }
}
