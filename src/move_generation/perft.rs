//! Perft: exhaustive move-path enumeration for verifying generation.
//!
//! Walks every legal line to a fixed depth through `GameState`, so the turn
//! cycle, castling flags, the en-passant memo and promotion (one leaf per
//! promotion kind) are all exercised.

use crate::game_state::chess_rules::PROMOTION_KINDS;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::has_any_legal_move;
use crate::move_generation::move_generator::MoveResult;
use crate::moves::move_descriptions::{MoveKind, MoveOutcome};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft(game_state: &GameState, depth: u8) -> MoveResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for (from, destinations) in game_state.all_legal_moves() {
        for to in destinations {
            let mut next = game_state.clone();
            let outcome = next.make_move(from, to)?;

            if outcome.promotion_pending {
                for kind in PROMOTION_KINDS {
                    let mut promoted = next.clone();
                    promoted.promote(kind)?;
                    total.merge(perft_child(&promoted, &outcome, depth)?);
                }
            } else {
                total.merge(perft_child(&next, &outcome, depth)?);
            }
        }
    }

    Ok(total)
}

/// Node count only.
pub fn perft_nodes(game_state: &GameState, depth: u8) -> MoveResult<usize> {
    Ok(perft(game_state, depth)?.nodes)
}

fn perft_child(child: &GameState, outcome: &MoveOutcome, depth: u8) -> MoveResult<PerftCounts> {
    if depth > 1 {
        return perft(child, depth - 1);
    }

    let mut counts = PerftCounts {
        nodes: 1,
        ..PerftCounts::default()
    };
    if outcome.kind.is_capture() {
        counts.captures += 1;
    }
    if outcome.kind == MoveKind::EnPassant {
        counts.en_passant += 1;
    }
    if matches!(outcome.kind, MoveKind::Castle(_)) {
        counts.castles += 1;
    }
    if outcome.promotion_pending {
        counts.promotions += 1;
    }

    let defender = child.side_to_move();
    if is_in_check(child.board(), defender) {
        counts.checks += 1;
        if !has_any_legal_move(child.board(), defender, &child.context()) {
            counts.checkmates += 1;
        }
    }

    Ok(counts)
}
