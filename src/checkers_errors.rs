//! Errors used throughout the draughts engine.
//!
//! `MoveError` is returned by every board mutation and turn action instead of
//! the silent no-op a bare rules table would produce, so callers can tell an
//! illegal request apart from a legitimate update. `BoardError` covers parsing
//! and structural validation of boards and king maps, and `ConfigError` covers
//! game configuration.

use crate::game_state::checkers_types::{Direction, JumpSide, Position, Token};

/// Why a mutation or turn action was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("square {position} is off a {height}x{width} board")]
    OutOfBounds {
        position: Position,
        height: usize,
        width: usize,
    },

    #[error("square {position} does not hold a {expected} token")]
    WrongToken { position: Position, expected: Token },

    #[error("{direction} step from {position} is not legal")]
    StepNotLegal {
        position: Position,
        direction: Direction,
    },

    #[error("{side} jump from {position} is not legal")]
    JumpNotLegal { position: Position, side: JumpSide },

    #[error("token at {0} is not a king")]
    NotAKing(Position),

    #[error("it is {current}'s turn")]
    NotYourTurn { current: Token },

    #[error("the jump chain must continue from {0}")]
    MustContinueJump(Position),

    #[error("no jump chain is in progress")]
    NoPendingJump,

    #[error("{to} is not a legal destination from {from}")]
    IllegalDestination { from: Position, to: Position },

    #[error("the game is already finished")]
    GameOver,
}

impl MoveError {
    /// Rewrites the positions carried by this error after a 180 degree rotation.
    ///
    /// Out-of-bounds errors are raised before any rotation and pass through.
    pub fn flipped(self, height: usize, width: usize) -> Self {
        match self {
            MoveError::WrongToken { position, expected } => MoveError::WrongToken {
                position: position.flipped(height, width),
                expected,
            },
            MoveError::StepNotLegal {
                position,
                direction,
            } => MoveError::StepNotLegal {
                position: position.flipped(height, width),
                direction,
            },
            MoveError::JumpNotLegal { position, side } => MoveError::JumpNotLegal {
                position: position.flipped(height, width),
                side: side.mirrored(),
            },
            MoveError::NotAKing(position) => MoveError::NotAKing(position.flipped(height, width)),
            other => other,
        }
    }
}

/// Structural problems found while parsing or validating a board or king map.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board has no rows")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    NotRectangular {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unexpected character {found:?} in board text")]
    InvalidCharacter { found: char },

    #[error("cell {position} holds invalid token {value}")]
    InvalidToken { position: Position, value: u8 },

    #[error("board is winning for both players")]
    WinningForBoth,

    #[error("unplayable tile {0} is occupied")]
    OccupiedBlankTile(Position),

    #[error("king map is {found_height}x{found_width}, expected {expected_height}x{expected_width}")]
    KingMapSize {
        expected_height: usize,
        expected_width: usize,
        found_height: usize,
        found_width: usize,
    },

    #[error("king flag at row {row}, collapsed column {col} has no token under it")]
    OrphanKing { row: usize, col: usize },
}

/// Invalid game configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("board dimensions must be positive even numbers, got {height}x{width}")]
    OddOrZeroDimensions { height: usize, width: usize },

    #[error("a {height}-row board cannot fit two sets of {home_rows} home rows")]
    TooShort { height: usize, home_rows: usize },
}
