//! King step patterns.

use crate::game_state::chess_types::{Square, SquareSet};
use crate::moves::knight_moves::generate_targets;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

pub const KING_TARGETS: [u64; 64] = generate_targets(&KING_OFFSETS);

#[inline]
pub const fn king_targets(square: Square) -> SquareSet {
    SquareSet::from_bits(KING_TARGETS[square.index()])
}
