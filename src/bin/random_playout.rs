//! Random self-play driver.
//!
//! Plays uniformly random legal moves (random promotion kinds included) from
//! the starting position until the game ends or the ply limit is reached,
//! then prints the final board and status.
//!
//! Usage:
//! `cargo run --release --bin random_playout`
//! `RUST_LOG=debug cargo run --bin random_playout -- --seed 7 --plies 80`

use log::info;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use chess_rules::game_state::chess_rules::PROMOTION_KINDS;
use chess_rules::game_state::chess_types::*;
use chess_rules::move_generation::move_generator::MoveError;
use chess_rules::utils::render_board::render_board;

fn parse_arg_u64(flag: &str, default: u64) -> u64 {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(v) = args[i + 1].parse::<u64>() {
                return v;
            }
        }
    }
    default
}

fn main() -> Result<(), MoveError> {
    env_logger::init();

    let seed = parse_arg_u64("--seed", 1);
    let max_plies = parse_arg_u64("--plies", 200);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = GameState::new_game();

    info!("random playout: seed={seed} max_plies={max_plies}");

    while u64::from(game.ply()) < max_plies && !game.status().is_over() {
        let candidates: Vec<(Square, Square)> = game
            .all_legal_moves()
            .into_iter()
            .flat_map(|(from, destinations)| destinations.iter().map(move |to| (from, to)))
            .collect();
        let Some(&(from, to)) = candidates.choose(&mut rng) else {
            break;
        };

        let outcome = game.make_move(from, to)?;
        if outcome.promotion_pending {
            let kind = PROMOTION_KINDS.choose(&mut rng).copied().unwrap_or(PieceKind::Queen);
            game.promote(kind)?;
        }
    }

    println!("{}", render_board(game.board(), game.checkers()));
    println!(
        "plies={} side_to_move={} status={:?}",
        game.ply(),
        game.side_to_move(),
        game.status()
    );
    Ok(())
}
