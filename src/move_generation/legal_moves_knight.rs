use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::step_moves;
use crate::moves::knight_moves::knight_targets;

pub fn knight_moves(board: &Board, origin: Square, color: Color) -> SquareSet {
    step_moves(board, color, knight_targets(origin))
}
