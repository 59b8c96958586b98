//! Plays a batch of seeded random games and summarises the outcomes.
//!
//! Usage:
//! `cargo run --release --bin random_playouts -- --games 500 --seed 7`

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use plum_checkers::game_state::checkers_types::{GameStatus, Token};
use plum_checkers::game_state::game_config::GameConfig;
use plum_checkers::utils::random_playout::play_random_game;
use plum_checkers::utils::render_game_state::render_game_state;

#[derive(Parser)]
#[command(name = "random_playouts", about = "Seeded random draughts self-play")]
struct Cli {
    /// Number of games to play
    #[arg(long, default_value_t = 100)]
    games: usize,

    /// Seed for the shared random number generator
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Actions after which an unfinished game is abandoned
    #[arg(long, default_value_t = 500)]
    max_actions: usize,

    #[arg(long, default_value_t = 8)]
    height: usize,

    #[arg(long, default_value_t = 8)]
    width: usize,

    /// Print the final board of every game
    #[arg(long)]
    show: bool,
}

#[derive(Default)]
struct Tally {
    one: usize,
    two: usize,
    draws: usize,
    abandoned: usize,
    actions: usize,
    captures: usize,
    crownings: usize,
}

fn main() -> Result<(), String> {
    env_logger::init();
    let cli = Cli::parse();
    let config = GameConfig::new(cli.height, cli.width);
    let mut rng = StdRng::seed_from_u64(cli.seed);
    let mut tally = Tally::default();

    for game in 0..cli.games {
        let report = play_random_game(&mut rng, &config, cli.max_actions).map_err(|e| e.to_string())?;
        match report.final_state.status {
            GameStatus::Won(Token::One) => tally.one += 1,
            GameStatus::Won(Token::Two) => tally.two += 1,
            GameStatus::Draw => tally.draws += 1,
            GameStatus::InProgress => tally.abandoned += 1,
        }
        tally.actions += report.actions;
        tally.captures += report.captures;
        tally.crownings += report.crownings;

        if cli.show {
            println!("game {game}:\n{}\n", render_game_state(&report.final_state));
        }
    }

    let games = cli.games.max(1) as f64;
    println!(
        "games={} one_wins={} two_wins={} draws={} abandoned={} avg_actions={:.1} avg_captures={:.1} avg_crownings={:.2}",
        cli.games,
        tally.one,
        tally.two,
        tally.draws,
        tally.abandoned,
        tally.actions as f64 / games,
        tally.captures as f64 / games,
        tally.crownings as f64 / games
    );
    Ok(())
}
