//! Pawn destinations: pushes, captures and en passant.

use crate::game_state::chess_rules::pawn_home_rank;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::enemy_piece_on;

pub fn pawn_moves(
    board: &Board,
    origin: Square,
    pawn: Piece,
    last_move: Option<LastMove>,
    mode: GenerationMode,
) -> SquareSet {
    let forward = pawn.color.forward();
    let mut out = SquareSet::EMPTY;

    if mode == GenerationMode::Attacks {
        for d_file in [-1i8, 1] {
            if let Some(target) = origin.offset(d_file, forward) {
                if board.color_at(target) != Some(pawn.color) {
                    out.insert(target);
                }
            }
        }
        return out;
    }

    if let Some(one_step) = origin.offset(0, forward) {
        if board.is_empty_at(one_step) {
            out.insert(one_step);

            if origin.rank() == pawn_home_rank(pawn.color) {
                if let Some(two_step) = origin.offset(0, 2 * forward) {
                    if board.is_empty_at(two_step) {
                        out.insert(two_step);
                    }
                }
            }
        }
    }

    for d_file in [-1i8, 1] {
        if let Some(target) = origin.offset(d_file, forward) {
            if enemy_piece_on(board, pawn.color, target).is_some() {
                out.insert(target);
            }
        }
    }

    if let Some(target) = en_passant_target(board, origin, pawn, last_move) {
        out.insert(target);
    }

    out
}

/// Square a pawn on `origin` may capture en passant onto, if `last_move` was
/// an enemy pawn's double advance that landed beside it.
pub fn en_passant_target(
    board: &Board,
    origin: Square,
    pawn: Piece,
    last_move: Option<LastMove>,
) -> Option<Square> {
    let LastMove { from, to } = last_move?;
    let bypassing = enemy_piece_on(board, pawn.color, to)?;
    if bypassing.kind != PieceKind::Pawn {
        return None;
    }

    let double_advance = from.file() == to.file() && from.rank().abs_diff(to.rank()) == 2;
    let beside = to.rank() == origin.rank() && to.file().abs_diff(origin.file()) == 1;
    if !double_advance || !beside {
        return None;
    }

    let d_file = to.file() as i8 - origin.file() as i8;
    let target = origin.offset(d_file, pawn.color.forward())?;
    board.is_empty_at(target).then_some(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::sq;

    fn squares(names: &[&str]) -> SquareSet {
        names.iter().map(|name| sq(name)).collect()
    }

    #[test]
    fn home_rank_pawn_pushes_one_or_two() {
        let board = Board::starting_position();
        let pawn = Piece::new(Color::White, PieceKind::Pawn);
        let moves = pawn_moves(&board, sq("e2"), pawn, None, GenerationMode::PseudoLegal);
        assert_eq!(moves, squares(&["e3", "e4"]));

        let black = Piece::new(Color::Black, PieceKind::Pawn);
        let moves = pawn_moves(&board, sq("c7"), black, None, GenerationMode::PseudoLegal);
        assert_eq!(moves, squares(&["c6", "c5"]));
    }

    #[test]
    fn double_push_needs_both_squares_empty() {
        let mut board = Board::starting_position();
        board.set(sq("e4"), Some(Piece::new(Color::Black, PieceKind::Knight)));
        let pawn = Piece::new(Color::White, PieceKind::Pawn);
        let moves = pawn_moves(&board, sq("e2"), pawn, None, GenerationMode::PseudoLegal);
        assert_eq!(moves, squares(&["e3"]));

        board.set(sq("e3"), Some(Piece::new(Color::Black, PieceKind::Knight)));
        let moves = pawn_moves(&board, sq("e2"), pawn, None, GenerationMode::PseudoLegal);
        assert!(moves.is_empty());
    }

    #[test]
    fn captures_only_enemy_pieces() {
        let mut board = Board::empty();
        let pawn = Piece::new(Color::White, PieceKind::Pawn);
        board.set(sq("d4"), Some(pawn));
        board.set(sq("c5"), Some(Piece::new(Color::Black, PieceKind::Bishop)));
        board.set(sq("e5"), Some(Piece::new(Color::White, PieceKind::Knight)));
        let moves = pawn_moves(&board, sq("d4"), pawn, None, GenerationMode::PseudoLegal);
        assert_eq!(moves, squares(&["d5", "c5"]));
    }

    #[test]
    fn en_passant_follows_adjacent_double_advance_only() {
        let mut board = Board::empty();
        let white = Piece::new(Color::White, PieceKind::Pawn);
        board.set(sq("e5"), Some(white));
        board.set(sq("d5"), Some(Piece::new(Color::Black, PieceKind::Pawn)));

        let double = Some(LastMove::new(sq("d7"), sq("d5")));
        assert_eq!(en_passant_target(&board, sq("e5"), white, double), Some(sq("d6")));
        let moves = pawn_moves(&board, sq("e5"), white, double, GenerationMode::PseudoLegal);
        assert_eq!(moves, squares(&["e6", "d6"]));

        let single = Some(LastMove::new(sq("d6"), sq("d5")));
        assert_eq!(en_passant_target(&board, sq("e5"), white, single), None);

        let elsewhere = Some(LastMove::new(sq("a7"), sq("a5")));
        assert_eq!(en_passant_target(&board, sq("e5"), white, elsewhere), None);
    }

    #[test]
    fn attack_mode_reports_diagonals_without_pushes() {
        let mut board = Board::empty();
        let black = Piece::new(Color::Black, PieceKind::Pawn);
        board.set(sq("a7"), Some(black));
        let attacks = pawn_moves(&board, sq("a7"), black, None, GenerationMode::Attacks);
        assert_eq!(attacks, squares(&["b6"]));
    }
}
