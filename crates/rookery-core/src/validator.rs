//! Legality: filtering pseudo-legal moves down to those that keep the king safe.

use crate::attacks::{is_in_check, is_square_attacked};
use crate::chess_move::Move;
use crate::game_state::GameState;
use crate::movegen::{MoveList, generate_pseudo_legal};

/// Return `true` if playing `mv` does not leave the mover's king attacked.
///
/// `mv` is assumed to be pseudo-legal in `state`. Castling is also refused
/// while in check or when any square the king crosses, start and end
/// included, is attacked. Every other move is played on a scratch board and
/// the mover's king tested afterwards, which covers pins, discovered checks
/// and en passant captures that open a rank.
pub fn is_move_legal(state: &GameState, mv: Move) -> bool {
    let board = state.board();
    let Some(piece) = board.get(mv.from()) else {
        return false;
    };
    let us = piece.color();
    let them = us.flip();

    if mv.is_castle() {
        let step: i8 = if mv.is_kingside_castle() { 1 } else { -1 };
        let (from, to) = (mv.from(), mv.to());
        let mut sq = from;
        loop {
            if is_square_attacked(board, sq, them) {
                return false;
            }
            if sq == to {
                return true;
            }
            match sq.offset(step, 0) {
                Some(next) => sq = next,
                None => return false,
            }
        }
    }

    !is_in_check(&board.apply_move(mv), us)
}

/// Every legal move for the side to move, in board-square order.
pub fn get_legal_moves(state: &GameState) -> MoveList {
    generate_pseudo_legal(
        state.board(),
        state.side_to_move(),
        state.en_passant(),
        state.castling(),
    )
    .iter()
    .copied()
    .filter(|&mv| is_move_legal(state, mv))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::GameState;
    use crate::square::Square;

    fn state(fen: &str) -> GameState {
        fen.parse().unwrap()
    }

    fn moves_from(state: &GameState, from: Square) -> Vec<Move> {
        get_legal_moves(state).iter().copied().filter(|m| m.from() == from).collect()
    }

    #[test]
    fn starting_position_20_moves() {
        assert_eq!(get_legal_moves(&GameState::new()).len(), 20);
    }

    #[test]
    fn pinned_knight_zero_moves() {
        // King e1, knight e2, rook e8: the knight is pinned on the e-file
        let s = state("4r2k/8/8/8/8/8/4N3/4K3 w - - 0 1");
        assert!(moves_from(&s, Square::E2).is_empty());
    }

    #[test]
    fn pinned_rook_slides_along_pin() {
        let s = state("4r2k/8/8/8/8/8/4R3/4K3 w - - 0 1");
        let moves = moves_from(&s, Square::E2);
        assert_eq!(moves.len(), 6);
        assert!(moves.iter().all(|m| m.to().file() == Square::E2.file()));
    }

    #[test]
    fn double_check_king_only() {
        // King e1, black knight f3 and rook e8
        let s = state("4r1k1/8/8/8/8/5n2/8/4K2R w K - 0 1");
        for mv in &get_legal_moves(&s) {
            assert_eq!(mv.from(), Square::E1, "only king moves resolve double check, got {mv:?}");
        }
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let s = state("4k3/8/8/8/8/8/3r4/4K3 w - - 0 1");
        let moves = moves_from(&s, Square::E1);
        assert_eq!(
            moves,
            vec![Move::new(Square::E1, Square::F1), Move::new_capture(Square::E1, Square::D2)]
        );
    }

    #[test]
    fn king_cannot_retreat_along_checking_ray() {
        let s = state("4k3/8/8/8/8/8/8/r3K3 w - - 0 1");
        let moves = moves_from(&s, Square::E1);
        assert!(!moves.contains(&Move::new(Square::E1, Square::F1)));
        assert!(!moves.contains(&Move::new(Square::E1, Square::D1)));
        assert_eq!(moves.len(), 3);
    }

    #[test]
    fn castling_not_through_check() {
        // Bishop a6 covers f1
        let s = state("4k3/8/b7/8/8/8/8/R3K2R w KQ - 0 1");
        assert!(!is_move_legal(&s, Move::new_castle(Square::E1, Square::G1)));
        assert!(is_move_legal(&s, Move::new_castle(Square::E1, Square::C1)));
    }

    #[test]
    fn castling_not_out_of_check() {
        let s = state("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1");
        let castles = get_legal_moves(&s).iter().filter(|m| m.is_castle()).count();
        assert_eq!(castles, 0);
    }

    #[test]
    fn castling_into_check_refused() {
        let s = state("4k1r1/8/8/8/8/8/8/R3K2R w KQ - 0 1");
        assert!(!is_move_legal(&s, Move::new_castle(Square::E1, Square::G1)));
    }

    #[test]
    fn queenside_b_file_attack_does_not_matter() {
        // Only e1, d1 and c1 must be safe; b1 may be attacked
        let s = state("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1");
        assert!(get_legal_moves(&s).contains(Move::new_castle(Square::E1, Square::C1)));
    }

    #[test]
    fn en_passant_legal() {
        let s = state("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
        let ep: Vec<_> = get_legal_moves(&s).iter().copied().filter(|m| m.is_en_passant()).collect();
        assert_eq!(ep, vec![Move::new_en_passant(Square::E5, Square::D6)]);
    }

    #[test]
    fn en_passant_discovered_check_illegal() {
        // bxc6 would clear the fifth rank between the king and the h5 rook
        let s = state("4k3/8/8/KPp4r/8/8/8/8 w - c6 0 1");
        assert!(!get_legal_moves(&s).iter().any(|m| m.is_en_passant()));
    }

    #[test]
    fn promotion_generates_4_moves() {
        let s = state("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
        let promos = get_legal_moves(&s).iter().filter(|m| m.is_promotion()).count();
        assert_eq!(promos, 4);
    }

    #[test]
    fn missing_king_moves_freely() {
        let board = crate::board::Board::from_placement("4k3/8/8/8/8/8/8/R7").unwrap();
        let s = GameState::from_parts(
            board,
            crate::color::Color::White,
            crate::castle_rights::CastleRights::NONE,
            None,
            0,
            1,
        );
        assert_eq!(get_legal_moves(&s).len(), 14);
    }
}
