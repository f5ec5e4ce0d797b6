//! Error types shared by move execution and the game cycle.

use thiserror::Error;

use crate::game_state::chess_types::*;
use crate::move_generation::game_status::GameStatus;

pub type MoveResult<T> = Result<T, MoveError>;

/// Ways applying a move or promotion can fail. The board is never modified
/// when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("no piece on {0}")]
    EmptySquare(Square),

    #[error("illegal move: {from} to {to}")]
    IllegalMove { from: Square, to: Square },

    #[error("the piece on {square} belongs to {color}, but it is not {color}'s turn")]
    NotYourTurn { square: Square, color: Color },

    #[error("the pawn on {0} must be promoted first")]
    PromotionPending(Square),

    #[error("no pawn awaiting promotion on {0}")]
    NothingToPromote(Square),

    #[error("no promotion is pending")]
    NoPendingPromotion,

    #[error("cannot promote to {0:?}; choose knight, bishop, rook or queen")]
    InvalidPromotionPiece(PieceKind),

    #[error("the game is over ({0:?})")]
    GameOver(GameStatus),
}
