//! Canonical draughts-rule constants.
//!
//! This module stores static rule-related literals such as the standard board
//! dimensions and the number of rows each side fills in the opening position.

use crate::game_state::checkers_types::Token;

/// Standard English draughts board height.
pub const DEFAULT_HEIGHT: usize = 8;

/// Standard English draughts board width.
pub const DEFAULT_WIDTH: usize = 8;

/// Rows populated by each side at the start of a game.
pub const HOME_ROWS: usize = 3;

/// Side that makes the first move of a new game.
pub const FIRST_PLAYER: Token = Token::Two;
