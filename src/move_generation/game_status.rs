//! Game status evaluation for the side to move.
//!
//! `is_checkmate` is "in check and no legal move anywhere". A side with no
//! legal move while not in check is reported separately as stalemate.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::has_any_legal_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

pub fn is_checkmate(board: &Board, color: Color, context: &MoveContext) -> bool {
    is_in_check(board, color) && !has_any_legal_move(board, color, context)
}

pub fn is_stalemate(board: &Board, color: Color, context: &MoveContext) -> bool {
    !is_in_check(board, color) && !has_any_legal_move(board, color, context)
}

pub fn game_status(board: &Board, color: Color, context: &MoveContext) -> GameStatus {
    let in_check = is_in_check(board, color);
    let can_move = has_any_legal_move(board, color, context);
    match (in_check, can_move) {
        (true, true) => GameStatus::Check,
        (true, false) => GameStatus::Checkmate,
        (false, true) => GameStatus::Ongoing,
        (false, false) => GameStatus::Stalemate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::sq;

    fn place(board: &mut Board, name: &str, color: Color, kind: PieceKind) {
        board.set(sq(name), Some(Piece::new(color, kind)));
    }

    #[test]
    fn back_rank_mate_is_checkmate() {
        let mut board = Board::empty();
        place(&mut board, "g1", Color::White, PieceKind::King);
        place(&mut board, "f2", Color::White, PieceKind::Pawn);
        place(&mut board, "g2", Color::White, PieceKind::Pawn);
        place(&mut board, "h2", Color::White, PieceKind::Pawn);
        place(&mut board, "e1", Color::Black, PieceKind::Rook);
        place(&mut board, "a8", Color::Black, PieceKind::King);
        let context = MoveContext::new(None, CastlingRights::none());

        assert!(is_checkmate(&board, Color::White, &context));
        assert_eq!(game_status(&board, Color::White, &context), GameStatus::Checkmate);
    }

    #[test]
    fn supported_queen_mates_cornered_king() {
        let mut board = Board::empty();
        place(&mut board, "h1", Color::White, PieceKind::King);
        place(&mut board, "g2", Color::Black, PieceKind::Queen);
        place(&mut board, "f3", Color::Black, PieceKind::King);
        let context = MoveContext::default();

        assert!(is_checkmate(&board, Color::White, &context));
    }

    #[test]
    fn unsupported_queen_can_be_captured() {
        let mut board = Board::empty();
        place(&mut board, "h1", Color::White, PieceKind::King);
        place(&mut board, "g2", Color::Black, PieceKind::Queen);
        place(&mut board, "a8", Color::Black, PieceKind::King);
        let context = MoveContext::default();

        assert!(!is_checkmate(&board, Color::White, &context));
        assert_eq!(game_status(&board, Color::White, &context), GameStatus::Check);
    }

    #[test]
    fn cornered_king_without_check_is_stalemate_not_checkmate() {
        let mut board = Board::empty();
        place(&mut board, "h1", Color::White, PieceKind::King);
        place(&mut board, "g3", Color::Black, PieceKind::Queen);
        place(&mut board, "a8", Color::Black, PieceKind::King);
        let context = MoveContext::default();

        assert!(!is_checkmate(&board, Color::White, &context));
        assert!(is_stalemate(&board, Color::White, &context));
        assert_eq!(game_status(&board, Color::White, &context), GameStatus::Stalemate);
        assert!(GameStatus::Stalemate.is_over());
    }

    #[test]
    fn start_position_is_ongoing() {
        let board = Board::starting_position();
        let context = MoveContext::default();
        assert_eq!(game_status(&board, Color::White, &context), GameStatus::Ongoing);
    }
}
