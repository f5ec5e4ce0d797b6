//! Turn-cycle owner for a single game.
//!
//! `GameState` owns the live board together with the side to move, the
//! last-move memo, castling flags and any pending promotion. It enforces the
//! cycle `select -> move -> (promote) -> switch turn` that a front end drives.

use log::debug;

use crate::game_state::chess_types::*;
use crate::move_generation::game_status::{game_status, GameStatus};
use crate::move_generation::legal_move_apply::{apply_move, promote};
use crate::move_generation::legal_move_checks::{checkers, is_in_check};
use crate::move_generation::legal_move_generator::{all_legal_moves, legal_moves};
use crate::move_generation::move_generator::{MoveError, MoveResult};
use crate::moves::move_descriptions::MoveOutcome;
use crate::utils::fen_parser::{parse_fen, FenError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) last_move: Option<LastMove>,
    pub(crate) castling: CastlingRights,
    pub(crate) pending_promotion: Option<Square>,
    pub(crate) ply: u16,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard initial position, white to move.
    pub fn new_game() -> Self {
        Self::from_board(Board::starting_position(), Color::White)
    }

    /// Start from an arbitrary board with every castling right available
    /// (the board must still hold king and rooks on their home squares).
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        Self {
            board,
            side_to_move,
            last_move: None,
            castling: CastlingRights::default(),
            pending_promotion: None,
            ply: 0,
        }
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        parse_fen(fen)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn last_move(&self) -> Option<LastMove> {
        self.last_move
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    /// Square of a pawn that must be promoted before the turn can pass.
    #[inline]
    pub fn pending_promotion(&self) -> Option<Square> {
        self.pending_promotion
    }

    /// Half-moves completed since this state was created.
    #[inline]
    pub fn ply(&self) -> u16 {
        self.ply
    }

    #[inline]
    pub fn context(&self) -> MoveContext {
        MoveContext::new(self.last_move, self.castling)
    }

    /// Legal destinations of the piece on `square`. Empty for empty squares,
    /// for the opponent's pieces, and while a promotion is pending.
    pub fn legal_moves(&self, square: Square) -> SquareSet {
        if self.pending_promotion.is_some() || self.board.color_at(square) != Some(self.side_to_move) {
            return SquareSet::EMPTY;
        }
        legal_moves(&self.board, square, &self.context())
    }

    /// Every movable piece of the side to move with its destinations.
    pub fn all_legal_moves(&self) -> Vec<(Square, SquareSet)> {
        if self.pending_promotion.is_some() {
            return Vec::new();
        }
        all_legal_moves(&self.board, self.side_to_move, &self.context())
    }

    /// Play `from -> to` for the side to move.
    ///
    /// When the move promotes, the turn does not pass until
    /// [`GameState::promote`] is called.
    pub fn make_move(&mut self, from: Square, to: Square) -> MoveResult<MoveOutcome> {
        if let Some(square) = self.pending_promotion {
            return Err(MoveError::PromotionPending(square));
        }

        let piece = self.board.get(from).ok_or(MoveError::EmptySquare(from))?;
        if piece.color != self.side_to_move {
            return Err(MoveError::NotYourTurn {
                square: from,
                color: piece.color,
            });
        }

        // A finished game has no legal move, so the whole-side status is only
        // needed to explain a rejection.
        let outcome = match apply_move(&mut self.board, &mut self.castling, from, to, self.last_move) {
            Ok(outcome) => outcome,
            Err(err) => {
                debug!("rejected {from}{to}: {err}");
                let status = self.status();
                return Err(if status.is_over() {
                    MoveError::GameOver(status)
                } else {
                    err
                });
            }
        };

        self.last_move = Some(LastMove::new(from, to));
        self.ply = self.ply.saturating_add(1);
        debug!("{} played {from}{to} ({:?})", self.side_to_move, outcome.kind);

        if outcome.promotion_pending {
            self.pending_promotion = Some(to);
            debug!("promotion pending on {to}");
        } else {
            self.switch_turn();
        }

        Ok(outcome)
    }

    /// Resolve a pending promotion and pass the turn.
    pub fn promote(&mut self, kind: PieceKind) -> MoveResult<Piece> {
        let Some(square) = self.pending_promotion else {
            return Err(MoveError::NoPendingPromotion);
        };

        let promoted = promote(&mut self.board, square, kind)?;
        debug!("promoted on {square} to {:?}", promoted.kind);
        self.pending_promotion = None;
        self.switch_turn();
        Ok(promoted)
    }

    pub fn is_in_check(&self) -> bool {
        is_in_check(&self.board, self.side_to_move)
    }

    /// Pieces currently giving check to the side to move.
    pub fn checkers(&self) -> SquareSet {
        checkers(&self.board, self.side_to_move)
    }

    pub fn is_checkmate(&self) -> bool {
        self.status() == GameStatus::Checkmate
    }

    /// Status of the side to move. While a promotion is pending the mover's
    /// turn is still open, so the game is reported as ongoing.
    pub fn status(&self) -> GameStatus {
        if self.pending_promotion.is_some() {
            return GameStatus::Ongoing;
        }
        game_status(&self.board, self.side_to_move, &self.context())
    }

    fn switch_turn(&mut self) {
        self.side_to_move = self.side_to_move.opposite();
        debug!("{} to move", self.side_to_move);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::move_descriptions::MoveKind;
    use crate::utils::algebraic::sq;

    fn play(game: &mut GameState, from: &str, to: &str) -> MoveOutcome {
        game.make_move(sq(from), sq(to))
            .unwrap_or_else(|err| panic!("{from}{to} should be legal: {err}"))
    }

    #[test]
    fn turns_alternate_and_last_move_is_recorded() {
        let mut game = GameState::new_game();
        play(&mut game, "e2", "e4");
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.last_move(), Some(LastMove::new(sq("e2"), sq("e4"))));
        assert_eq!(
            game.make_move(sq("d2"), sq("d4")),
            Err(MoveError::NotYourTurn { square: sq("d2"), color: Color::White })
        );
        assert!(game.legal_moves(sq("d2")).is_empty());
        assert_eq!(game.ply(), 1);
    }

    #[test]
    fn normal_diagonal_capture_is_not_en_passant() {
        let mut game = GameState::new_game();
        play(&mut game, "e2", "e4");
        play(&mut game, "d7", "d5");
        let outcome = play(&mut game, "e4", "d5");
        assert_eq!(outcome.kind, MoveKind::Capture);
        assert_eq!(outcome.captured, Some(Piece::new(Color::Black, PieceKind::Pawn)));
        assert_eq!(game.board().get(sq("d5")), Some(Piece::new(Color::White, PieceKind::Pawn)));
    }

    #[test]
    fn en_passant_window_closes_after_one_move() {
        let mut game = GameState::new_game();
        play(&mut game, "e2", "e4");
        play(&mut game, "a7", "a6");
        play(&mut game, "e4", "e5");
        play(&mut game, "d7", "d5");
        assert!(game.legal_moves(sq("e5")).contains(sq("d6")));

        play(&mut game, "h2", "h3");
        play(&mut game, "h7", "h6");
        assert!(!game.legal_moves(sq("e5")).contains(sq("d6")));
    }

    #[test]
    fn kingside_castling_after_clearing_f1_and_g1() {
        let mut game = GameState::new_game();
        play(&mut game, "e2", "e4");
        play(&mut game, "a7", "a6");
        assert!(!game.legal_moves(sq("e1")).contains(sq("g1")));
        play(&mut game, "g1", "f3");
        play(&mut game, "a6", "a5");
        play(&mut game, "f1", "c4");
        play(&mut game, "a5", "a4");

        assert!(game.legal_moves(sq("e1")).contains(sq("g1")));
        let outcome = play(&mut game, "e1", "g1");
        assert_eq!(outcome.kind, MoveKind::Castle(CastleSide::Kingside));
        assert_eq!(game.board().get(sq("f1")), Some(Piece::new(Color::White, PieceKind::Rook)));
        assert!(game.board().is_empty_at(sq("h1")));
    }

    #[test]
    fn returning_king_does_not_regain_castling() {
        let mut board = Board::empty();
        board.set(sq("e1"), Some(Piece::new(Color::White, PieceKind::King)));
        board.set(sq("h1"), Some(Piece::new(Color::White, PieceKind::Rook)));
        board.set(sq("e8"), Some(Piece::new(Color::Black, PieceKind::King)));
        board.set(sq("a7"), Some(Piece::new(Color::Black, PieceKind::Pawn)));
        let mut game = GameState::from_board(board, Color::White);
        assert!(game.legal_moves(sq("e1")).contains(sq("g1")));

        play(&mut game, "e1", "f1");
        play(&mut game, "a7", "a6");
        play(&mut game, "f1", "e1");
        play(&mut game, "a6", "a5");
        assert!(!game.legal_moves(sq("e1")).contains(sq("g1")));
    }

    #[test]
    fn castling_through_attacked_square_is_refused() {
        let mut board = Board::empty();
        board.set(sq("e1"), Some(Piece::new(Color::White, PieceKind::King)));
        board.set(sq("h1"), Some(Piece::new(Color::White, PieceKind::Rook)));
        board.set(sq("f8"), Some(Piece::new(Color::Black, PieceKind::Rook)));
        board.set(sq("a8"), Some(Piece::new(Color::Black, PieceKind::King)));
        let game = GameState::from_board(board, Color::White);

        assert!(!game.legal_moves(sq("e1")).contains(sq("g1")));
    }

    #[test]
    fn castling_refused_when_king_start_or_landing_is_attacked() {
        let in_check = GameState::from_fen("4r2k/8/8/8/8/8/8/4K2R w K -").expect("FEN should parse");
        assert!(in_check.is_in_check());
        assert!(!in_check.legal_moves(sq("e1")).contains(sq("g1")));

        let landing = GameState::from_fen("6rk/8/8/8/8/8/8/4K2R w K -").expect("FEN should parse");
        assert!(!landing.legal_moves(sq("e1")).contains(sq("g1")));
        assert!(landing.legal_moves(sq("e1")).contains(sq("f1")));

        let pawn_cover = GameState::from_fen("7k/8/8/8/8/8/4p3/4K2R w K -").expect("FEN should parse");
        assert!(!pawn_cover.legal_moves(sq("e1")).contains(sq("g1")));
        assert!(!pawn_cover.legal_moves(sq("e1")).contains(sq("f1")));
    }

    #[test]
    fn rejected_moves_leave_the_game_untouched() {
        let mut game = GameState::new_game();
        let before = game.clone();
        assert_eq!(
            game.make_move(sq("e2"), sq("e5")),
            Err(MoveError::IllegalMove { from: sq("e2"), to: sq("e5") })
        );
        assert_eq!(game, before);

        let mut stalemate = GameState::from_fen("k7/8/1Q6/8/8/8/8/7K b - -").expect("FEN should parse");
        let before = stalemate.clone();
        assert_eq!(
            stalemate.make_move(sq("a8"), sq("a7")),
            Err(MoveError::GameOver(GameStatus::Stalemate))
        );
        assert_eq!(stalemate, before);
    }

    #[test]
    fn promotion_holds_the_turn_until_resolved() {
        let mut board = Board::empty();
        board.set(sq("e1"), Some(Piece::new(Color::White, PieceKind::King)));
        board.set(sq("a8"), Some(Piece::new(Color::Black, PieceKind::King)));
        board.set(sq("g7"), Some(Piece::new(Color::White, PieceKind::Pawn)));
        let mut game = GameState::from_board(board, Color::White);

        let outcome = play(&mut game, "g7", "g8");
        assert!(outcome.promotion_pending);
        assert_eq!(game.pending_promotion(), Some(sq("g8")));
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(
            game.make_move(sq("e1"), sq("e2")),
            Err(MoveError::PromotionPending(sq("g8")))
        );
        assert_eq!(game.promote(PieceKind::King), Err(MoveError::InvalidPromotionPiece(PieceKind::King)));

        let promoted = game.promote(PieceKind::Queen).expect("queen promotion is allowed");
        assert_eq!(promoted, Piece::new(Color::White, PieceKind::Queen));
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.pending_promotion(), None);
        assert_eq!(game.status(), GameStatus::Check);
        assert_eq!(game.checkers().iter().collect::<Vec<_>>(), vec![sq("g8")]);
    }

    #[test]
    fn fools_mate_ends_the_game() {
        let mut game = GameState::new_game();
        play(&mut game, "f2", "f3");
        play(&mut game, "e7", "e5");
        play(&mut game, "g2", "g4");
        play(&mut game, "d8", "h4");

        assert!(game.is_in_check());
        assert!(game.is_checkmate());
        assert!(game.all_legal_moves().is_empty());
        assert_eq!(
            game.make_move(sq("a2"), sq("a3")),
            Err(MoveError::GameOver(GameStatus::Checkmate))
        );
    }
}
