//! Direction vectors and precomputed leaper/ray tables.

use crate::bitboard::Bitboard;

/// (file, rank) steps of a knight.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2), (2, 1), (2, -1), (1, -2),
    (-1, -2), (-2, -1), (-2, 1), (-1, 2),
];

/// (file, rank) steps of a king, also the queen's ray directions.
pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1), (1, 1), (1, 0), (1, -1),
    (0, -1), (-1, -1), (-1, 0), (-1, 1),
];

/// Rook ray directions.
pub(crate) const ORTHOGONALS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Bishop ray directions.
pub(crate) const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

const fn on_board(file: i8, rank: i8) -> bool {
    file >= 0 && file < 8 && rank >= 0 && rank < 8
}

const fn bit(file: i8, rank: i8) -> u64 {
    1u64 << (rank as u32 * 8 + file as u32)
}

const fn leaper_table(offsets: &[(i8, i8)]) -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    let mut sq = 0;
    while sq < 64 {
        let file = (sq % 8) as i8;
        let rank = (sq / 8) as i8;
        let mut bits = 0u64;
        let mut i = 0;
        while i < offsets.len() {
            let f = file + offsets[i].0;
            let r = rank + offsets[i].1;
            if on_board(f, r) {
                bits |= bit(f, r);
            }
            i += 1;
        }
        table[sq] = Bitboard::new(bits);
        sq += 1;
    }
    table
}

/// Index 0 = White (captures toward rank 8), index 1 = Black (toward rank 1).
const fn pawn_tables() -> [[Bitboard; 64]; 2] {
    [
        leaper_table(&[(-1, 1), (1, 1)]),
        leaper_table(&[(-1, -1), (1, -1)]),
    ]
}

const fn signum(x: i8) -> i8 {
    if x > 0 {
        1
    } else if x < 0 {
        -1
    } else {
        0
    }
}

/// Squares strictly between two squares on a shared rank, file or diagonal;
/// empty for unaligned pairs.
const fn between_table() -> [[Bitboard; 64]; 64] {
    let mut table = [[Bitboard::EMPTY; 64]; 64];
    let mut s1 = 0;
    while s1 < 64 {
        let mut s2 = 0;
        while s2 < 64 {
            let (f1, r1) = ((s1 % 8) as i8, (s1 / 8) as i8);
            let (f2, r2) = ((s2 % 8) as i8, (s2 / 8) as i8);
            let (df, dr) = (f2 - f1, r2 - r1);
            let aligned = df == 0 || dr == 0 || df == dr || df == -dr;
            if s1 != s2 && aligned {
                let (sf, sr) = (signum(df), signum(dr));
                let mut bits = 0u64;
                let (mut f, mut r) = (f1 + sf, r1 + sr);
                while f != f2 || r != r2 {
                    bits |= bit(f, r);
                    f += sf;
                    r += sr;
                }
                table[s1][s2] = Bitboard::new(bits);
            }
            s2 += 1;
        }
        s1 += 1;
    }
    table
}

pub(crate) static KNIGHT_ATTACKS: [Bitboard; 64] = leaper_table(&KNIGHT_OFFSETS);
pub(crate) static KING_ATTACKS: [Bitboard; 64] = leaper_table(&KING_OFFSETS);
pub(crate) static PAWN_ATTACKS: [[Bitboard; 64]; 2] = pawn_tables();
pub(crate) static BETWEEN: [[Bitboard; 64]; 64] = between_table();
