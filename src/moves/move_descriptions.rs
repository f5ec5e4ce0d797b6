//! Classification of a move by its shape on the board.
//!
//! A move is an (origin, destination) pair; its kind is derived from the
//! moving piece, the file/rank deltas and whether the destination is empty.
//! Presentation layers use this to tag promotion, castling and en-passant
//! destinations without re-deriving the rules.

use crate::game_state::chess_rules::{castle_side_for, promotion_rank};
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Quiet,
    Capture,
    DoublePawnPush,
    EnPassant,
    Castle(CastleSide),
}

impl MoveKind {
    pub const fn is_capture(self) -> bool {
        matches!(self, MoveKind::Capture | MoveKind::EnPassant)
    }
}

/// What applying a move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub from: Square,
    pub to: Square,
    pub moved: Piece,
    pub kind: MoveKind,
    pub captured: Option<Piece>,
    /// A pawn reached its last rank and must be promoted before play continues.
    pub promotion_pending: bool,
}

/// Classify `from -> to` on `board`. Returns `None` when `from` is empty.
/// Does not check legality.
pub fn classify_move(board: &Board, from: Square, to: Square) -> Option<MoveKind> {
    let piece = board.get(from)?;
    let d_file = to.file() as i8 - from.file() as i8;
    let d_rank = to.rank() as i8 - from.rank() as i8;
    let target_empty = board.is_empty_at(to);

    let kind = match piece.kind {
        PieceKind::King if d_file.abs() == 2 && d_rank == 0 => {
            match castle_side_for(piece.color, to) {
                Some(side) => MoveKind::Castle(side),
                None => MoveKind::Quiet,
            }
        }
        PieceKind::Pawn if d_file != 0 && target_empty => MoveKind::EnPassant,
        PieceKind::Pawn if d_file == 0 && d_rank.abs() == 2 => MoveKind::DoublePawnPush,
        _ if target_empty => MoveKind::Quiet,
        _ => MoveKind::Capture,
    };
    Some(kind)
}

/// True when `piece` standing on `square` is a pawn awaiting promotion.
#[inline]
pub fn can_promote(piece: Piece, square: Square) -> bool {
    piece.kind == PieceKind::Pawn && square.rank() == promotion_rank(piece.color)
}

/// True when moving `from -> to` ends in promotion.
pub fn is_promotion_move(board: &Board, from: Square, to: Square) -> bool {
    board
        .get(from)
        .is_some_and(|piece| can_promote(piece, to))
}

/// Squares currently holding a pawn that awaits promotion.
pub fn promotion_squares(board: &Board) -> SquareSet {
    board
        .occupied()
        .filter(|&(square, piece)| can_promote(piece, square))
        .map(|(square, _)| square)
        .collect()
}
