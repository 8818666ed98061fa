//! Zobrist keys and the position hash used for repetition counting.
//!
//! Keys are generated at compile time from a fixed seed, so a position
//! hashes to the same value in every build and on every platform.

use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::square::Square;

const SEED: u64 = 0x726f_6f6b_6572_7921; // "rookery!"

/// Xorshift64 PRNG. Returns (value, next_state).
const fn xorshift64(mut state: u64) -> (u64, u64) {
    state ^= state << 13;
    state ^= state >> 7;
    state ^= state << 17;
    (state, state)
}

struct Keys {
    /// Indexed by `[Piece::index()][Square::index()]`.
    piece_square: [[u64; 64]; 12],
    black_to_move: u64,
    /// One key per castling flag, indexed by bit position.
    castling: [u64; 4],
    /// Indexed by the en passant target's `Square::index()`.
    en_passant: [u64; 64],
}

const fn generate() -> Keys {
    let mut keys = Keys {
        piece_square: [[0; 64]; 12],
        black_to_move: 0,
        castling: [0; 4],
        en_passant: [0; 64],
    };
    let mut state = SEED;

    let mut piece = 0;
    while piece < 12 {
        let mut sq = 0;
        while sq < 64 {
            let (val, next) = xorshift64(state);
            keys.piece_square[piece][sq] = val;
            state = next;
            sq += 1;
        }
        piece += 1;
    }

    let (val, next) = xorshift64(state);
    keys.black_to_move = val;
    state = next;

    let mut bit = 0;
    while bit < 4 {
        let (val, next) = xorshift64(state);
        keys.castling[bit] = val;
        state = next;
        bit += 1;
    }

    let mut sq = 0;
    while sq < 64 {
        let (val, next) = xorshift64(state);
        keys.en_passant[sq] = val;
        state = next;
        sq += 1;
    }
    keys
}

static KEYS: Keys = generate();

/// Hash of placement, side to move, castling rights and en passant target.
///
/// Move counters and history are not part of the hash: two
/// states that differ only in those repeat the same position.
pub fn position_hash(
    board: &Board,
    side_to_move: Color,
    castling: CastleRights,
    en_passant: Option<Square>,
) -> u64 {
    let mut hash = 0u64;

    for color in Color::ALL {
        for sq in board.side(color) {
            if let Some(piece) = board.get(sq) {
                hash ^= KEYS.piece_square[piece.index()][sq.index()];
            }
        }
    }

    if side_to_move == Color::Black {
        hash ^= KEYS.black_to_move;
    }

    for (bit, key) in KEYS.castling.iter().enumerate() {
        if castling.bits() & (1 << bit) != 0 {
            hash ^= key;
        }
    }

    if let Some(ep) = en_passant {
        hash ^= KEYS.en_passant[ep.index()];
    }

    hash
}
