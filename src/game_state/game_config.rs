//! Board-size configuration for new games.

use crate::checkers_errors::ConfigError;
use crate::game_state::checkers_rules::{DEFAULT_HEIGHT, DEFAULT_WIDTH, HOME_ROWS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameConfig {
    pub height: usize,
    pub width: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
        }
    }
}

impl GameConfig {
    #[inline]
    pub const fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }

    /// Checks that the board can be collapsed and rotated, and that the two
    /// sets of home rows leave at least one empty row between them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bad_dimension = |n: usize| n == 0 || n % 2 != 0;
        if bad_dimension(self.height) || bad_dimension(self.width) {
            return Err(ConfigError::OddOrZeroDimensions {
                height: self.height,
                width: self.width,
            });
        }
        if self.height <= 2 * HOME_ROWS {
            return Err(ConfigError::TooShort {
                height: self.height,
                home_rows: HOME_ROWS,
            });
        }
        Ok(())
    }
}
