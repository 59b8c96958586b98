//! Turn-level game state.
//!
//! `GameState` bundles the board, its king map, the side to move and any jump
//! chain in progress. It is the one place where a requested move is checked
//! against the side to move, applied with the matching king-map update, and
//! followed by crowning, turn hand-off and the finish check.

use crate::checkers_errors::{ConfigError, MoveError};
use crate::game_state::board_model::{empty_board, empty_king_map, populate};
use crate::game_state::checkers_rules::FIRST_PLAYER;
use crate::game_state::checkers_types::{
    Board, GameStatus, KingMap, Orientation, Position, Token,
};
use crate::game_state::game_config::GameConfig;
use crate::move_generation::game_outcome::game_status;
use crate::move_generation::king_map_updates::{
    crown_player, update_king_map_capture, update_king_map_step,
};
use crate::move_generation::legal_move_apply::{advance_piece, capture_piece, jump_king, move_king};
use crate::move_generation::legal_move_generator::{
    planned_moves_for, planned_moves_from, Action, PlannedMove,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    pub board: Board,
    pub king_map: KingMap,
    pub current_player: Token,
    /// Square of the piece that just jumped and may jump again.
    pub pending_jump: Option<Position>,
    pub status: GameStatus,
}

impl Default for GameState {
    fn default() -> Self {
        Self::standard()
    }
}

impl GameState {
    /// Standard 8x8 opening position.
    pub fn standard() -> Self {
        let config = GameConfig::default();
        Self::opening(config.height, config.width)
    }

    pub fn new_game(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::opening(config.height, config.width))
    }

    fn opening(height: usize, width: usize) -> Self {
        Self {
            board: populate(&empty_board(height, width)),
            king_map: empty_king_map(height, width),
            current_player: FIRST_PLAYER,
            pending_jump: None,
            status: GameStatus::InProgress,
        }
    }

    /// Wraps an arbitrary position with `current` to move. The status is
    /// computed, not assumed.
    pub fn from_parts(board: Board, king_map: KingMap, current: Token) -> Self {
        let status = game_status(&board, &king_map, current);
        Self {
            board,
            king_map,
            current_player: current,
            pending_jump: None,
            status,
        }
    }

    #[inline]
    pub fn is_king(&self, position: Position) -> bool {
        self.king_map.get(position.row, position.collapsed_col()) == Some(true)
    }

    /// Token standing on `position`, if any.
    #[inline]
    pub fn token_at(&self, position: Position) -> Option<Token> {
        self.board
            .get(position.row, position.col)
            .and_then(Token::from_cell)
    }

    /// Moves the side to move may make with the piece on `from`.
    pub fn legal_moves_from(&self, from: Position) -> Vec<PlannedMove> {
        if self.status.is_finished() || self.token_at(from) != Some(self.current_player) {
            return Vec::new();
        }
        match self.pending_jump {
            Some(chain) if chain != from => Vec::new(),
            Some(_) => planned_moves_from(&self.board, &self.king_map, from)
                .into_iter()
                .filter(PlannedMove::is_capture)
                .collect(),
            None => planned_moves_from(&self.board, &self.king_map, from),
        }
    }

    /// Every move available to the side to move.
    pub fn legal_moves(&self) -> Vec<PlannedMove> {
        if self.status.is_finished() {
            return Vec::new();
        }
        match self.pending_jump {
            Some(chain) => self.legal_moves_from(chain),
            None => planned_moves_for(&self.board, &self.king_map, self.current_player),
        }
    }

    pub fn legal_destinations(&self, from: Position) -> Vec<Position> {
        self.legal_moves_from(from)
            .into_iter()
            .map(|planned| planned.to)
            .collect()
    }

    /// Moves the piece on `from` to `to` for the side to move.
    pub fn apply(&self, from: Position, to: Position) -> Result<Self, MoveError> {
        self.check_turn(from).inspect_err(|e| {
            log::debug!("rejected {from} -> {to}: {e}");
        })?;
        let Some(planned) = self
            .legal_moves_from(from)
            .into_iter()
            .find(|planned| planned.to == to)
        else {
            let err = MoveError::IllegalDestination { from, to };
            log::debug!("rejected {from} -> {to}: {err}");
            return Err(err);
        };
        self.execute(&planned)
    }

    /// Applies a move produced by the generator for this state. Anything not
    /// in `legal_moves_from(planned.from)` is rejected.
    pub fn apply_planned(&self, planned: &PlannedMove) -> Result<Self, MoveError> {
        let PlannedMove { from, to, .. } = *planned;
        self.check_turn(from).inspect_err(|e| {
            log::debug!("rejected {from} -> {to}: {e}");
        })?;
        if !self.legal_moves_from(from).contains(planned) {
            let err = MoveError::IllegalDestination { from, to };
            log::debug!("rejected {from} -> {to}: {err}");
            return Err(err);
        }
        self.execute(planned)
    }

    /// Stops a jump chain and passes the turn.
    pub fn end_turn(&self) -> Result<Self, MoveError> {
        if self.status.is_finished() {
            return Err(MoveError::GameOver);
        }
        if self.pending_jump.is_none() {
            return Err(MoveError::NoPendingJump);
        }
        Ok(self.hand_off(self.board.clone(), self.king_map.clone()))
    }

    fn check_turn(&self, from: Position) -> Result<(), MoveError> {
        if self.status.is_finished() {
            return Err(MoveError::GameOver);
        }
        match self.board.get(from.row, from.col) {
            None => {
                return Err(MoveError::OutOfBounds {
                    position: from,
                    height: self.board.height(),
                    width: self.board.width(),
                })
            }
            Some(cell) if cell == self.current_player.opposite().cell() => {
                return Err(MoveError::NotYourTurn {
                    current: self.current_player,
                })
            }
            Some(cell) if cell != self.current_player.cell() => {
                return Err(MoveError::WrongToken {
                    position: from,
                    expected: self.current_player,
                })
            }
            Some(_) => {}
        }
        match self.pending_jump {
            Some(chain) if chain != from => Err(MoveError::MustContinueJump(chain)),
            _ => Ok(()),
        }
    }

    fn execute(&self, planned: &PlannedMove) -> Result<Self, MoveError> {
        let token = self.current_player;
        let PlannedMove { from, to, action } = *planned;
        let (row, col) = (from.row, from.col);
        log::trace!("{token}: {from} -> {to} ({action:?})");

        match action {
            Action::Step {
                direction,
                orientation,
            } => {
                let heading = orientation.heading_for(token);
                let board = match orientation {
                    Orientation::Forward => {
                        advance_piece(token, col, row, direction, heading, &self.board)?
                    }
                    Orientation::Backward => move_king(
                        token,
                        col,
                        row,
                        direction,
                        orientation,
                        &self.board,
                        &self.king_map,
                    )?,
                };
                let king_map = update_king_map_step(col, row, direction, heading, &self.king_map);
                Ok(self.hand_off(board, king_map))
            }
            Action::Jump {
                side, orientation, ..
            } => {
                let heading = orientation.heading_for(token);
                let board = match orientation {
                    Orientation::Forward => capture_piece(token, col, row, side, heading, &self.board)?,
                    Orientation::Backward => jump_king(
                        token,
                        col,
                        row,
                        side,
                        orientation,
                        &self.board,
                        &self.king_map,
                    )?,
                };
                let king_map = update_king_map_capture(col, row, side, heading, &self.king_map);

                let can_continue = planned_moves_from(&board, &king_map, to)
                    .iter()
                    .any(PlannedMove::is_capture);
                if can_continue {
                    Ok(Self {
                        board,
                        king_map,
                        current_player: token,
                        pending_jump: Some(to),
                        status: GameStatus::InProgress,
                    })
                } else {
                    Ok(self.hand_off(board, king_map))
                }
            }
        }
    }

    /// Crowns arrivals, passes the turn and recomputes the status.
    fn hand_off(&self, board: Board, king_map: KingMap) -> Self {
        let king_map = crown_player(&board, &king_map);
        let next = self.current_player.opposite();
        let status = game_status(&board, &king_map, next);
        if status.is_finished() {
            log::trace!("game finished: {status:?}");
        }
        Self {
            board,
            king_map,
            current_player: next,
            pending_jump: None,
            status,
        }
    }
}
