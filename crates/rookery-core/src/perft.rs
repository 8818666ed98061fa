//! Perft (performance test) for move generation correctness verification.

use crate::game_state::GameState;
use crate::validator::get_legal_moves;

/// Count the number of leaf nodes at the given depth.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number
/// of legal moves without playing them.
pub fn perft(state: &GameState, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = get_legal_moves(state);

    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .iter()
        .map(|&mv| perft(&state.advance(mv), depth - 1))
        .sum()
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns a vector of `(uci_move, node_count)` pairs sorted alphabetically.
pub fn divide(state: &GameState, depth: usize) -> Vec<(String, u64)> {
    let mut results: Vec<(String, u64)> = get_legal_moves(state)
        .iter()
        .map(|&mv| {
            let count = if depth <= 1 { 1 } else { perft(&state.advance(mv), depth - 1) };
            (mv.to_uci(), count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
