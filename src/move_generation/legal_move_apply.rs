//! Move executor.
//!
//! [`apply_move`] re-derives the legal destinations of the origin before
//! touching the board, so a caller-supplied list is never trusted. The same
//! side-effect routine backs the legality filter's simulation.

use log::trace;

use crate::game_state::chess_rules::{castling_layout, is_promotion_kind};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::move_generation::move_generator::{MoveError, MoveResult};
use crate::moves::move_descriptions::{can_promote, classify_move, MoveKind, MoveOutcome};

/// Validate and play `origin -> destination` on the live board.
///
/// On success castling flags are updated and the outcome reports whether a
/// promotion is now pending. Turn order and the last-move memo are left to
/// the caller. On failure the board and rights are untouched.
pub fn apply_move(
    board: &mut Board,
    castling: &mut CastlingRights,
    origin: Square,
    destination: Square,
    last_move: Option<LastMove>,
) -> MoveResult<MoveOutcome> {
    if board.is_empty_at(origin) {
        return Err(MoveError::EmptySquare(origin));
    }

    let context = MoveContext::new(last_move, *castling);
    if !legal_moves(board, origin, &context).contains(destination) {
        return Err(MoveError::IllegalMove {
            from: origin,
            to: destination,
        });
    }

    let outcome = apply_move_unchecked(board, origin, destination)
        .ok_or(MoveError::EmptySquare(origin))?;
    castling.record_move(origin, destination);
    Ok(outcome)
}

/// Play a move without validating it, performing castling rook relocation
/// and en-passant pawn removal. Returns `None` if `origin` is empty.
pub(crate) fn apply_move_unchecked(
    board: &mut Board,
    origin: Square,
    destination: Square,
) -> Option<MoveOutcome> {
    let kind = classify_move(board, origin, destination)?;
    let moved = board.remove(origin)?;
    let mut captured = board.get(destination);

    match kind {
        MoveKind::Castle(side) => {
            let layout = castling_layout(moved.color, side);
            let rook = board.remove(layout.rook_from);
            board.set(layout.king_transit, rook);
            trace!("castling: rook {} -> {}", layout.rook_from, layout.king_transit);
        }
        MoveKind::EnPassant => {
            // The bypassed pawn sits beside the origin, on the destination file.
            if let Some(bypassed) = Square::new(destination.file(), origin.rank()) {
                captured = board.remove(bypassed);
                trace!("en passant: removed pawn on {bypassed}");
            }
        }
        _ => {}
    }

    board.set(destination, Some(moved));

    Some(MoveOutcome {
        from: origin,
        to: destination,
        moved,
        kind,
        captured,
        promotion_pending: can_promote(moved, destination),
    })
}

/// Replace the pawn awaiting promotion on `square` with `kind`.
pub fn promote(board: &mut Board, square: Square, kind: PieceKind) -> MoveResult<Piece> {
    if !is_promotion_kind(kind) {
        return Err(MoveError::InvalidPromotionPiece(kind));
    }

    let pawn = board
        .get(square)
        .filter(|&piece| can_promote(piece, square))
        .ok_or(MoveError::NothingToPromote(square))?;

    let promoted = Piece::new(pawn.color, kind);
    board.set(square, Some(promoted));
    Ok(promoted)
}
