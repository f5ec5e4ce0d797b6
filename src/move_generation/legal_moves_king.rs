use crate::game_state::chess_rules::castling_layout;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::step_moves;
use crate::moves::king_moves::king_targets;

pub fn king_moves(
    board: &Board,
    origin: Square,
    color: Color,
    castling: &CastlingRights,
    mode: GenerationMode,
) -> SquareSet {
    let mut out = step_moves(board, color, king_targets(origin));
    if mode != GenerationMode::Attacks {
        out = out.union(castling_moves(board, origin, color, castling));
    }
    out
}

/// Castling destinations for a king of `color` on `origin`.
///
/// Requires the king and same-coloured rook on their home squares, unmoved
/// according to `castling`, an empty path between them, and no attack on the
/// king's start, transit or landing square.
pub fn castling_moves(
    board: &Board,
    origin: Square,
    color: Color,
    castling: &CastlingRights,
) -> SquareSet {
    let mut out = SquareSet::EMPTY;
    let enemy = color.opposite();
    let king = Piece::new(color, PieceKind::King);
    let rook = Piece::new(color, PieceKind::Rook);

    for side in [CastleSide::Kingside, CastleSide::Queenside] {
        let layout = castling_layout(color, side);
        if origin != layout.king_from
            || board.get(origin) != Some(king)
            || board.get(layout.rook_from) != Some(rook)
            || !castling.can_castle(color, side)
        {
            continue;
        }

        if layout.between.iter().any(|&square| !board.is_empty_at(square)) {
            continue;
        }

        let king_path = [layout.king_from, layout.king_transit, layout.king_to];
        if king_path
            .iter()
            .any(|&square| is_square_attacked(board, square, enemy))
        {
            continue;
        }

        out.insert(layout.king_to);
    }

    out
}
