//! Per-origin move generation pipeline.
//!
//! Dispatches to the piece-wise generators and, in [`GenerationMode::Legal`],
//! runs every candidate through the legality filter: the move is replayed on
//! an owned clone of the board and rejected if it leaves the mover in check.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move_unchecked;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_moves_bishop::bishop_moves;
use crate::move_generation::legal_moves_king::king_moves;
use crate::move_generation::legal_moves_knight::knight_moves;
use crate::move_generation::legal_moves_pawn::pawn_moves;
use crate::move_generation::legal_moves_queen::queen_moves;
use crate::move_generation::legal_moves_rook::rook_moves;

/// Destinations for the piece on `origin` under `mode`. An empty origin
/// yields an empty set.
pub fn pseudo_legal_moves(
    board: &Board,
    origin: Square,
    context: &MoveContext,
    mode: GenerationMode,
) -> SquareSet {
    let Some(piece) = board.get(origin) else {
        return SquareSet::EMPTY;
    };

    let candidates = match piece.kind {
        PieceKind::Pawn => pawn_moves(board, origin, piece, context.last_move, mode),
        PieceKind::Knight => knight_moves(board, origin, piece.color),
        PieceKind::Bishop => bishop_moves(board, origin, piece.color),
        PieceKind::Rook => rook_moves(board, origin, piece.color),
        PieceKind::Queen => queen_moves(board, origin, piece.color),
        PieceKind::King => king_moves(board, origin, piece.color, &context.castling, mode),
    };

    if mode != GenerationMode::Legal {
        return candidates;
    }

    candidates
        .iter()
        .filter(|&to| is_legal_move(board, origin, to))
        .collect()
}

/// Legal destinations for the piece on `origin`.
#[inline]
pub fn legal_moves(board: &Board, origin: Square, context: &MoveContext) -> SquareSet {
    pseudo_legal_moves(board, origin, context, GenerationMode::Legal)
}

/// Legality filter for one pseudo-legal candidate: true when playing it does
/// not leave the mover's own king in check. The pair itself is not checked
/// against the piece's movement rules.
pub(crate) fn is_legal_move(board: &Board, origin: Square, to: Square) -> bool {
    let Some(mover) = board.color_at(origin) else {
        return false;
    };
    let mut scratch = board.clone();
    apply_move_unchecked(&mut scratch, origin, to);
    !is_in_check(&scratch, mover)
}

/// Every piece of `color` that has at least one legal destination, with its
/// destinations.
pub fn all_legal_moves(board: &Board, color: Color, context: &MoveContext) -> Vec<(Square, SquareSet)> {
    board
        .pieces(color)
        .map(|(origin, _)| (origin, legal_moves(board, origin, context)))
        .filter(|(_, moves)| !moves.is_empty())
        .collect()
}

pub fn has_any_legal_move(board: &Board, color: Color, context: &MoveContext) -> bool {
    board
        .pieces(color)
        .any(|(origin, _)| !legal_moves(board, origin, context).is_empty())
}
