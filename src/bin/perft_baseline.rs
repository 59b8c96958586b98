//! Perft baseline runner.
//!
//! Usage:
//! `cargo run --release --bin perft_baseline`
//! `cargo run --release --bin perft_baseline -- --depth 6 --threaded`

use std::sync::Arc;
use std::time::Instant;

use clap::Parser;

use plum_checkers::game_state::game_config::GameConfig;
use plum_checkers::game_state::game_state::GameState;
use plum_checkers::move_generation::legal_move_generator::LegalMoveGenerator;
use plum_checkers::move_generation::perft::{perft_legal, perft_multi_threaded, PerftCounts};
use plum_checkers::utils::render_game_state::render_game_state;

/// Count the game tree below the opening position.
#[derive(Parser)]
#[command(name = "perft_baseline", about = "Draughts perft baseline")]
struct Cli {
    /// Deepest ply to count; every depth from 1 up is reported
    #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u8).range(1..))]
    depth: u8,

    /// Board height
    #[arg(long, default_value_t = 8)]
    height: usize,

    /// Board width
    #[arg(long, default_value_t = 8)]
    width: usize,

    /// Split the root moves across threads
    #[arg(long)]
    threaded: bool,
}

fn run_depth(game: &GameState, depth: u8, threaded: bool) -> Result<PerftCounts, String> {
    let counts = if threaded {
        perft_multi_threaded(Arc::new(LegalMoveGenerator), game, depth)
    } else {
        perft_legal(game, depth)
    };
    counts.map_err(|e| e.to_string())
}

fn main() -> Result<(), String> {
    env_logger::init();
    let cli = Cli::parse();

    let config = GameConfig::new(cli.height, cli.width);
    let game = GameState::new_game(&config).map_err(|e| e.to_string())?;
    println!("{}\n", render_game_state(&game));
    println!(
        "perft baseline: {}x{} depth={} threaded={}",
        cli.height, cli.width, cli.depth, cli.threaded
    );

    for depth in 1..=cli.depth {
        let start = Instant::now();
        let counts = run_depth(&game, depth, cli.threaded)?;
        let elapsed = start.elapsed();
        let nps = (counts.nodes as f64 / elapsed.as_secs_f64().max(1e-9)) as u64;
        println!(
            "depth={depth} nodes={} captures={} promotions={} end_turns={} finished={} elapsed_ms={} nps={nps}",
            counts.nodes,
            counts.captures,
            counts.promotions,
            counts.end_turns,
            counts.finished_games,
            elapsed.as_millis()
        );
    }
    Ok(())
}
