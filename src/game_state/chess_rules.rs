//! Fixed facts of standard chess used across generation and execution.

use crate::game_state::chess_types::{CastleSide, Color, PieceKind, Square};

pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Kinds a pawn may become on its last rank.
pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
];

pub const BACK_RANK_ORDER: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[inline]
pub const fn is_promotion_kind(kind: PieceKind) -> bool {
    matches!(
        kind,
        PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
    )
}

/// Zero-based rank pawns of `color` start on.
#[inline]
pub const fn pawn_home_rank(color: Color) -> u8 {
    match color {
        Color::White => 1,
        Color::Black => 6,
    }
}

/// Zero-based rank on which pawns of `color` promote.
#[inline]
pub const fn promotion_rank(color: Color) -> u8 {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}

/// Squares involved in one castling move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingLayout {
    pub king_from: Square,
    pub king_to: Square,
    /// Square the king crosses; the rook lands here.
    pub king_transit: Square,
    pub rook_from: Square,
    /// Squares that must be empty between king and rook.
    pub between: &'static [Square],
}

const WHITE_KINGSIDE: CastlingLayout = CastlingLayout {
    king_from: Square::E1,
    king_to: Square::G1,
    king_transit: Square::F1,
    rook_from: Square::H1,
    between: &[Square::F1, Square::G1],
};

const WHITE_QUEENSIDE: CastlingLayout = CastlingLayout {
    king_from: Square::E1,
    king_to: Square::C1,
    king_transit: Square::D1,
    rook_from: Square::A1,
    between: &[Square::B1, Square::C1, Square::D1],
};

const BLACK_KINGSIDE: CastlingLayout = CastlingLayout {
    king_from: Square::E8,
    king_to: Square::G8,
    king_transit: Square::F8,
    rook_from: Square::H8,
    between: &[Square::F8, Square::G8],
};

const BLACK_QUEENSIDE: CastlingLayout = CastlingLayout {
    king_from: Square::E8,
    king_to: Square::C8,
    king_transit: Square::D8,
    rook_from: Square::A8,
    between: &[Square::B8, Square::C8, Square::D8],
};

#[inline]
pub const fn castling_layout(color: Color, side: CastleSide) -> CastlingLayout {
    match (color, side) {
        (Color::White, CastleSide::Kingside) => WHITE_KINGSIDE,
        (Color::White, CastleSide::Queenside) => WHITE_QUEENSIDE,
        (Color::Black, CastleSide::Kingside) => BLACK_KINGSIDE,
        (Color::Black, CastleSide::Queenside) => BLACK_QUEENSIDE,
    }
}

/// Castling side implied by a king landing on `king_to`, if any.
pub fn castle_side_for(color: Color, king_to: Square) -> Option<CastleSide> {
    [CastleSide::Kingside, CastleSide::Queenside]
        .into_iter()
        .find(|&side| castling_layout(color, side).king_to == king_to)
}
