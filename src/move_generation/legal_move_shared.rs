use crate::game_state::chess_types::*;

/// Walks each ray from `origin`, one step at a time. A ray ends before the
/// board edge, before a friendly piece, or on (including) an enemy piece.
pub fn slide_moves(board: &Board, origin: Square, color: Color, directions: &[(i8, i8)]) -> SquareSet {
    let mut out = SquareSet::EMPTY;
    for &(d_file, d_rank) in directions {
        let mut cursor = origin;
        while let Some(next) = cursor.offset(d_file, d_rank) {
            match board.color_at(next) {
                None => out.insert(next),
                Some(occupant) => {
                    if occupant != color {
                        out.insert(next);
                    }
                    break;
                }
            }
            cursor = next;
        }
    }
    out
}

/// Drops friendly-occupied squares from a fixed target pattern.
pub fn step_moves(board: &Board, color: Color, targets: SquareSet) -> SquareSet {
    targets
        .iter()
        .filter(|&square| board.color_at(square) != Some(color))
        .collect()
}

#[inline]
pub fn enemy_piece_on(board: &Board, color: Color, square: Square) -> Option<Piece> {
    board.get(square).filter(|piece| piece.color != color)
}
