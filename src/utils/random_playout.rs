//! Random self-play harness.
//!
//! Plays both sides by picking uniformly among the generator's actions. Used
//! by the playout binary and by invariant tests over reachable positions.

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::checkers_errors::ConfigError;
use crate::game_state::checkers_types::GameStatus;
use crate::game_state::game_config::GameConfig;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::{MoveGenerationError, MoveGenerator};

#[derive(Debug, thiserror::Error)]
pub enum PlayoutError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    MoveGeneration(#[from] MoveGenerationError),
}

#[derive(Debug, Clone)]
pub struct PlayoutReport {
    pub final_state: GameState,
    pub actions: usize,
    pub captures: usize,
    pub crownings: usize,
}

impl PlayoutReport {
    /// The game ran into the action cap before finishing.
    #[inline]
    pub fn hit_action_limit(&self) -> bool {
        self.final_state.status == GameStatus::InProgress
    }
}

pub fn play_random_game<R: Rng + ?Sized>(
    rng: &mut R,
    config: &GameConfig,
    max_actions: usize,
) -> Result<PlayoutReport, PlayoutError> {
    play_random_game_observed(rng, config, max_actions, |_| {})
}

/// `play_random_game`, calling `observe` on the opening and on every state
/// reached afterwards.
pub fn play_random_game_observed<R: Rng + ?Sized>(
    rng: &mut R,
    config: &GameConfig,
    max_actions: usize,
    mut observe: impl FnMut(&GameState),
) -> Result<PlayoutReport, PlayoutError> {
    let generator = LegalMoveGenerator;
    let mut state = GameState::new_game(config)?;
    let mut report = PlayoutReport {
        final_state: state.clone(),
        actions: 0,
        captures: 0,
        crownings: 0,
    };
    observe(&state);

    while report.actions < max_actions && !state.status.is_finished() {
        let moves = generator.generate_legal_moves(&state)?;
        let Some(choice) = moves.choose(rng) else {
            break;
        };
        if choice.action.is_capture() {
            report.captures += 1;
        }
        if choice.crowned {
            report.crownings += 1;
        }
        report.actions += 1;
        state = choice.game_after_move.clone();
        observe(&state);
    }

    log::debug!(
        "random playout: {} actions, {} captures, {} crownings, {:?}",
        report.actions,
        report.captures,
        report.crownings,
        state.status
    );
    report.final_state = state;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board_model::{collapse_board, reform_board};
    use crate::game_state::checkers_types::Token;
    use crate::move_generation::legal_move_generator::planned_moves_for;
    use crate::utils::board_validation::{validate_board, validate_king_map};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn reachable_positions_stay_well_formed() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut previous: Option<(usize, usize)> = None;
            play_random_game_observed(&mut rng, &GameConfig::default(), 400, |state| {
                validate_board(&state.board).expect("reachable boards are valid");
                validate_king_map(&state.board, &state.king_map)
                    .expect("king flags follow their pieces");
                assert_eq!(reform_board(&collapse_board(&state.board)), state.board);

                let counts = (state.board.count(1), state.board.count(2));
                if let Some((one, two)) = previous {
                    assert!(counts.0 <= one && counts.1 <= two, "pieces never appear");
                }
                previous = Some(counts);
            })
            .expect("playout runs");
        }
    }

    #[test]
    fn finished_games_report_a_consistent_outcome() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            let report = play_random_game(&mut rng, &GameConfig::default(), 1_000).expect("playout runs");
            let board = &report.final_state.board;
            match report.final_state.status {
                GameStatus::Won(Token::One) => assert_eq!(board.count(2), 0),
                GameStatus::Won(Token::Two) => assert_eq!(board.count(1), 0),
                GameStatus::Draw => {
                    let stuck = report.final_state.current_player;
                    assert!(planned_moves_for(board, &report.final_state.king_map, stuck).is_empty());
                }
                GameStatus::InProgress => assert!(report.hit_action_limit()),
            }
            assert!(report.captures <= 24);
        }
    }

    #[test]
    fn same_seed_same_game() {
        let a = play_random_game(&mut StdRng::seed_from_u64(42), &GameConfig::default(), 200)
            .expect("playout runs");
        let b = play_random_game(&mut StdRng::seed_from_u64(42), &GameConfig::default(), 200)
            .expect("playout runs");
        assert_eq!(a.final_state, b.final_state);
        assert_eq!(a.actions, b.actions);
    }

    #[test]
    fn invalid_config_is_reported() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            play_random_game(&mut rng, &GameConfig::new(5, 8), 10),
            Err(PlayoutError::Config(_))
        ));
    }
}
