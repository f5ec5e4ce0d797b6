//! Check oracle: attack and check queries.
//!
//! Attack sets come from generation in [`GenerationMode::Attacks`], which
//! never considers castling or king safety, so these queries can be used from
//! inside castling generation and the legality filter without recursing.

use log::trace;

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::pseudo_legal_moves;

#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    board.king_square(color)
}

/// True when `color`'s king stands on a square attacked by the other colour.
/// A board without such a king reports `false`.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = king_square(board, color) else {
        trace!("no {color} king on board; treating as not in check");
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    board
        .pieces(attacker_color)
        .any(|(from, _)| attack_set(board, from).contains(square))
}

/// Origins of `attacker_color` pieces attacking `square`.
pub fn attackers_of(board: &Board, square: Square, attacker_color: Color) -> SquareSet {
    board
        .pieces(attacker_color)
        .filter(|&(from, _)| attack_set(board, from).contains(square))
        .map(|(from, _)| from)
        .collect()
}

/// Pieces giving check to `color`'s king.
pub fn checkers(board: &Board, color: Color) -> SquareSet {
    match king_square(board, color) {
        Some(king_sq) => attackers_of(board, king_sq, color.opposite()),
        None => SquareSet::EMPTY,
    }
}

#[inline]
fn attack_set(board: &Board, from: Square) -> SquareSet {
    pseudo_legal_moves(board, from, &MoveContext::default(), GenerationMode::Attacks)
}
