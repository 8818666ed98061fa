//! Knight move generation.

use crate::attacks::knight_attacks;
use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

use super::{MoveList, push_targets};

/// Generate pseudo-legal moves for the `us` knight on `from`.
pub(super) fn gen_knight(board: &Board, from: Square, us: Color, list: &mut MoveList) {
    push_targets(board, from, us, knight_attacks(from), list);
}
