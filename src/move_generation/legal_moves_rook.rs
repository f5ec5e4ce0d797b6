//! Rook destinations along ranks and files.
//!
//! Castling is generated from the king's side; a rook never initiates it.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::slide_moves;
use crate::moves::sliding_moves::ROOK_DIRECTIONS;

pub fn rook_moves(board: &Board, origin: Square, color: Color) -> SquareSet {
    slide_moves(board, origin, color, &ROOK_DIRECTIONS)
}
