//! Core value types shared by the board model and the rules engine.

use std::fmt;

pub use crate::game_state::game_state::GameState;
pub use crate::game_state::grid::{Board, Grid, KingMap, MoveMap};

/// Contents of a single board cell: `EMPTY`, `1` or `2`.
pub type Cell = u8;

pub const EMPTY: Cell = 0;

/// A player's token. Player one starts on the top rows, player two on the bottom rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Token {
    One,
    Two,
}

impl Token {
    #[inline]
    pub const fn cell(self) -> Cell {
        match self {
            Token::One => 1,
            Token::Two => 2,
        }
    }

    #[inline]
    pub const fn from_cell(cell: Cell) -> Option<Self> {
        match cell {
            1 => Some(Token::One),
            2 => Some(Token::Two),
            _ => None,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Token::One => Token::Two,
            Token::Two => Token::One,
        }
    }

    /// Board-absolute heading of this token's natural advance.
    #[inline]
    pub const fn forward_heading(self) -> Heading {
        match self {
            Token::One => Heading::Down,
            Token::Two => Heading::Up,
        }
    }

    /// Row a man of this side must reach to be crowned.
    #[inline]
    pub const fn crowning_row(self, height: usize) -> usize {
        match self {
            Token::One => height - 1,
            Token::Two => 0,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::One => write!(f, "player one"),
            Token::Two => write!(f, "player two"),
        }
    }
}

/// Kind of single-row step: `Straight` keeps the collapsed column, `Diagonal`
/// shifts it by the row's `MoveLabel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Straight,
    Diagonal,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Straight => write!(f, "straight"),
            Direction::Diagonal => write!(f, "diagonal"),
        }
    }
}

/// Side of a jump, as seen by someone reading the board from row 0 down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JumpSide {
    Left,
    Right,
}

impl JumpSide {
    /// Handedness after a 180 degree rotation of the board.
    #[inline]
    pub const fn mirrored(self) -> Self {
        match self {
            JumpSide::Left => JumpSide::Right,
            JumpSide::Right => JumpSide::Left,
        }
    }
}

impl fmt::Display for JumpSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JumpSide::Left => write!(f, "left"),
            JumpSide::Right => write!(f, "right"),
        }
    }
}

/// Direction of travel relative to the moving player's natural advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Forward,
    Backward,
}

impl Orientation {
    #[inline]
    pub const fn heading_for(self, token: Token) -> Heading {
        match self {
            Orientation::Forward => token.forward_heading(),
            Orientation::Backward => token.forward_heading().reversed(),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Forward => write!(f, "forward"),
            Orientation::Backward => write!(f, "backward"),
        }
    }
}

/// Board-absolute vertical heading. `Up` is toward row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    Up,
    Down,
}

impl Heading {
    #[inline]
    pub const fn reversed(self) -> Self {
        match self {
            Heading::Up => Heading::Down,
            Heading::Down => Heading::Up,
        }
    }
}

/// Lateral option of a collapsed tile when stepping up one row.
///
/// `S` tiles sit on the board edge and only have the straight option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveLabel {
    S,
    L,
    R,
}

/// Where a game stands after the latest action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Won(Token),
    Draw,
}

impl GameStatus {
    #[inline]
    pub const fn is_finished(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Full-board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Column of this position in the collapsed board and the king map.
    #[inline]
    pub const fn collapsed_col(self) -> usize {
        self.col / 2
    }

    /// Same square after rotating a `height` x `width` board by 180 degrees.
    #[inline]
    pub const fn flipped(self, height: usize, width: usize) -> Self {
        Self {
            row: height - 1 - self.row,
            col: width - 1 - self.col,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
