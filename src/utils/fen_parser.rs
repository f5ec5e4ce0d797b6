//! FEN-to-GameState parser.
//!
//! Position setup only: builds a `GameState` from Forsyth-Edwards Notation,
//! mapping castling letters onto moved-flags and the en-passant target onto
//! the last-move memo (the double advance that created it). The halfmove and
//! fullmove counters are accepted but not tracked.

use thiserror::Error;

use crate::game_state::chess_types::*;
use crate::utils::algebraic::{algebraic_to_square, SquareParseError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("missing {0} field in FEN")]
    MissingField(&'static str),
    #[error("FEN has extra trailing fields")]
    TrailingFields,
    #[error("board layout must contain 8 ranks, found {0}")]
    RankCount(usize),
    #[error("board rank {rank} does not sum to 8 files")]
    RankWidth { rank: u8 },
    #[error("invalid piece character {0:?} in board layout")]
    InvalidPiece(char),
    #[error("invalid side to move: {0:?}")]
    InvalidSide(String),
    #[error("invalid castling rights: {0:?}")]
    InvalidCastling(String),
    #[error("invalid en-passant square: {0}")]
    InvalidEnPassantSquare(#[from] SquareParseError),
    #[error("en-passant square {0} is not on the expected rank")]
    EnPassantRank(Square),
    #[error("invalid move counter: {0:?}")]
    InvalidCounter(String),
}

pub fn parse_fen(fen: &str) -> Result<GameState, FenError> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or(FenError::MissingField("board layout"))?;
    let side_part = parts.next().ok_or(FenError::MissingField("side-to-move"))?;
    let castling_part = parts.next().ok_or(FenError::MissingField("castling rights"))?;
    let en_passant_part = parts.next().ok_or(FenError::MissingField("en-passant square"))?;

    // Counters are optional; many fixtures omit them.
    for counter in parts.by_ref().take(2) {
        counter
            .parse::<u16>()
            .map_err(|_| FenError::InvalidCounter(counter.to_owned()))?;
    }
    if parts.next().is_some() {
        return Err(FenError::TrailingFields);
    }

    let board = parse_board(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;

    let mut game_state = GameState::from_board(board, side_to_move);
    game_state.castling = parse_castling_rights(castling_part)?;
    game_state.last_move = parse_en_passant(en_passant_part, side_to_move)?;

    Ok(game_state)
}

fn parse_board(board_part: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::RankCount(ranks.len()));
    }

    let mut board = Board::empty();
    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(FenError::InvalidPiece(ch));
                }
                file += empty_count as u8;
                if file > 8 {
                    return Err(FenError::RankWidth {
                        rank: board_rank + 1,
                    });
                }
                continue;
            }

            let piece = Piece::from_fen_char(ch).ok_or(FenError::InvalidPiece(ch))?;
            let square = Square::new(file, board_rank).ok_or(FenError::RankWidth {
                rank: board_rank + 1,
            })?;
            board.set(square, Some(piece));
            file += 1;
        }

        if file != 8 {
            return Err(FenError::RankWidth {
                rank: board_rank + 1,
            });
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> Result<Color, FenError> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(FenError::InvalidSide(side_part.to_owned())),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, FenError> {
    let mut rights = CastlingRights::none();
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        let (color, side) = match ch {
            'K' => (Color::White, CastleSide::Kingside),
            'Q' => (Color::White, CastleSide::Queenside),
            'k' => (Color::Black, CastleSide::Kingside),
            'q' => (Color::Black, CastleSide::Queenside),
            _ => return Err(FenError::InvalidCastling(castling_part.to_owned())),
        };
        let flags = rights.flags_mut(color);
        flags.king_moved = false;
        match side {
            CastleSide::Kingside => flags.kingside_rook_moved = false,
            CastleSide::Queenside => flags.queenside_rook_moved = false,
        }
    }

    Ok(rights)
}

/// The en-passant target is the square the opponent's pawn skipped; rebuild
/// the double advance that produced it.
fn parse_en_passant(en_passant_part: &str, side_to_move: Color) -> Result<Option<LastMove>, FenError> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let target = algebraic_to_square(en_passant_part)?;
    let mover = side_to_move.opposite();
    let expected_rank = match mover {
        Color::White => 2,
        Color::Black => 5,
    };
    if target.rank() != expected_rank {
        return Err(FenError::EnPassantRank(target));
    }

    let forward = mover.forward();
    let from = target.offset(0, -forward).ok_or(FenError::EnPassantRank(target))?;
    let to = target.offset(0, forward).ok_or(FenError::EnPassantRank(target))?;
    Ok(Some(LastMove::new(from, to)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::utils::algebraic::sq;

    #[test]
    fn starting_fen_matches_starting_position() {
        let game = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert_eq!(game, GameState::new_game());
    }

    #[test]
    fn partial_castling_rights_map_onto_flags() {
        let game = parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1").expect("FEN should parse");
        let rights = game.castling_rights();
        assert!(rights.can_castle(Color::White, CastleSide::Kingside));
        assert!(!rights.can_castle(Color::White, CastleSide::Queenside));
        assert!(!rights.can_castle(Color::Black, CastleSide::Kingside));
        assert!(rights.can_castle(Color::Black, CastleSide::Queenside));
    }

    #[test]
    fn en_passant_target_becomes_last_move() {
        let game = parse_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3")
            .expect("FEN should parse");
        assert_eq!(game.last_move(), Some(LastMove::new(sq("d7"), sq("d5"))));
        assert!(game.legal_moves(sq("e5")).contains(sq("d6")));
    }

    #[test]
    fn counters_are_optional() {
        let game = parse_fen("8/8/8/8/8/8/8/K6k b - -").expect("short FEN should parse");
        assert_eq!(game.side_to_move(), Color::Black);
    }

    #[test]
    fn malformed_fen_is_rejected() {
        assert_eq!(parse_fen(""), Err(FenError::MissingField("board layout")));
        assert_eq!(parse_fen("8/8/8 w - -"), Err(FenError::RankCount(3)));
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/K6 w - -"),
            Err(FenError::RankWidth { rank: 1 })
        );
        assert_eq!(
            parse_fen("88888888888888888888888888888888888/8/8/8/8/8/8/K6k w - -"),
            Err(FenError::RankWidth { rank: 8 })
        );
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/K6k5 w - -"),
            Err(FenError::RankWidth { rank: 1 })
        );
        assert_eq!(parse_fen("8/8/8/8/8/8/8/K6x w - -"), Err(FenError::InvalidPiece('x')));
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/K6k x - -"),
            Err(FenError::InvalidSide("x".to_owned()))
        );
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/K6k w - e4"),
            Err(FenError::EnPassantRank(sq("e4")))
        );
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/K6k w - - 0 1 extra"),
            Err(FenError::TrailingFields)
        );
    }
}
