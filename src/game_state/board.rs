//! Square-indexed board occupancy.
//!
//! `Board` is pure storage: it performs no rule checks. Move legality lives in
//! `move_generation`; the legality filter clones a `Board` before simulating.

use std::fmt;

use crate::game_state::chess_rules::BACK_RANK_ORDER;
use crate::game_state::chess_types::*;
use crate::utils::render_board::render_board;

#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            squares: [None; 64],
        }
    }

    /// Standard initial placement.
    pub fn starting_position() -> Self {
        let mut board = Self::empty();
        for (file, kind) in BACK_RANK_ORDER.into_iter().enumerate() {
            let file = file as u8;
            for (color, back_rank, pawn_rank) in [(Color::White, 0, 1), (Color::Black, 7, 6)] {
                if let Some(square) = Square::new(file, back_rank) {
                    board.set(square, Some(Piece::new(color, kind)));
                }
                if let Some(square) = Square::new(file, pawn_rank) {
                    board.set(square, Some(Piece::new(color, PieceKind::Pawn)));
                }
            }
        }
        board
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.index()] = piece;
    }

    /// Clears `square`, returning what stood there.
    #[inline]
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.index()].take()
    }

    #[inline]
    pub fn is_empty_at(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    #[inline]
    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.get(square).map(|piece| piece.color)
    }

    /// Occupied squares with their pieces, in index order.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|square| self.get(square).map(|piece| (square, piece)))
    }

    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied().filter(move |(_, piece)| piece.color == color)
    }

    pub fn occupancy(&self, color: Color) -> SquareSet {
        self.pieces(color).map(|(square, _)| square).collect()
    }

    /// First square holding `color`'s king. A board without one yields `None`;
    /// a board with two reports the lower-indexed king.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(color, PieceKind::King);
        self.occupied()
            .find(|&(_, piece)| piece == king)
            .map(|(square, _)| square)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self, SquareSet::EMPTY))
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board")?;
        f.write_str(&render_board(self, SquareSet::EMPTY))
    }
}
