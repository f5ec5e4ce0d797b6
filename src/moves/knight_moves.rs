//! Knight jump patterns.

use crate::game_state::chess_types::{Square, SquareSet};

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub const KNIGHT_TARGETS: [u64; 64] = generate_targets(&KNIGHT_OFFSETS);

/// Every on-board square a knight on `square` jumps to, ignoring occupancy.
#[inline]
pub const fn knight_targets(square: Square) -> SquareSet {
    SquareSet::from_bits(KNIGHT_TARGETS[square.index()])
}

/// Builds a per-square table of fixed-offset destinations.
pub(crate) const fn generate_targets(offsets: &[(i8, i8); 8]) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i8;
        let rank = (sq / 8) as i8;
        let mut targets = 0u64;
        let mut i = 0usize;

        while i < offsets.len() {
            targets |= set_if_valid(file + offsets[i].0, rank + offsets[i].1);
            i += 1;
        }

        table[sq] = targets;
        sq += 1;
    }

    table
}

const fn set_if_valid(file: i8, rank: i8) -> u64 {
    if file < 0 || file > 7 || rank < 0 || rank > 7 {
        return 0;
    }

    let square = (rank as usize) * 8 + (file as usize);
    1u64 << square
}

#[cfg(test)]
mod tests {
    use super::knight_targets;
    use crate::game_state::chess_types::Square;

    #[test]
    fn knight_targets_from_d4_has_eight_squares() {
        let d4 = Square::new(3, 3).expect("d4 exists");
        assert_eq!(knight_targets(d4).len(), 8);
    }

    #[test]
    fn knight_targets_from_corner_has_two_squares() {
        let targets = knight_targets(Square::A1);
        assert_eq!(targets.len(), 2);
        assert!(targets.contains(Square::new(1, 2).expect("b3 exists")));
        assert!(targets.contains(Square::new(2, 1).expect("c2 exists")));
    }
}
