//! Crate root module declarations for the Plum Checkers rules engine.
//!
//! This file exposes all top-level subsystems (board model and game state,
//! legality queries and mutations, move generation and perft, and utility
//! helpers) so binaries, tests, and external tooling can import stable module
//! paths.

pub mod checkers_errors;

pub mod game_state {
    pub mod board_model;
    pub mod checkers_rules;
    pub mod checkers_types;
    pub mod game_config;
    pub mod game_state;
    pub mod grid;
}

pub mod move_generation {
    pub mod game_outcome;
    pub mod king_map_updates;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod move_generator;
    pub mod perft;
}

pub mod utils {
    pub mod board_notation;
    pub mod board_validation;
    pub mod random_playout;
    pub mod render_game_state;
}
