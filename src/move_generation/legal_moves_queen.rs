use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::slide_moves;
use crate::moves::sliding_moves::QUEEN_DIRECTIONS;

pub fn queen_moves(board: &Board, origin: Square, color: Color) -> SquareSet {
    slide_moves(board, origin, color, &QUEEN_DIRECTIONS)
}
