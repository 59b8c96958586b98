//! Full legal move generation.
//!
//! Turns the collapsed query maps into concrete `PlannedMove`s with
//! full-board origin and destination squares, for a single piece or for every
//! piece of one side, and drives `GameState` to produce `GeneratedMove`s.

use crate::game_state::board_model::{full_col, jump_path, legal_tile, step_target};
use crate::game_state::checkers_types::{
    Board, Direction, Heading, JumpSide, KingMap, Orientation, Position, Token,
};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::{jump_map_toward, step_map_toward};
use crate::move_generation::move_generator::{
    GeneratedMove, MoveGenResult, MoveGenerationError, MoveGenerator, TurnAction,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Step {
        direction: Direction,
        orientation: Orientation,
    },
    Jump {
        side: JumpSide,
        orientation: Orientation,
        captured: Position,
    },
}

/// A legal move resolved to board squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlannedMove {
    pub from: Position,
    pub to: Position,
    pub action: Action,
}

impl PlannedMove {
    #[inline]
    pub fn is_capture(&self) -> bool {
        matches!(self.action, Action::Jump { .. })
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        match self.action {
            Action::Step { orientation, .. } | Action::Jump { orientation, .. } => orientation,
        }
    }
}

/// Maps squares into the frame a heading's primitives work in. Self-inverse.
#[derive(Debug, Clone, Copy)]
struct Frame {
    heading: Heading,
    height: usize,
    width: usize,
}

impl Frame {
    fn map(&self, position: Position) -> Position {
        match self.heading {
            Heading::Up => position,
            Heading::Down => position.flipped(self.height, self.width),
        }
    }

    fn square(&self, (row, col): (usize, usize)) -> Position {
        self.map(Position::new(row, full_col(row, col)))
    }
}

/// Every legal move of the piece on `from`, ignoring whose turn it is.
pub fn planned_moves_from(board: &Board, king_map: &KingMap, from: Position) -> Vec<PlannedMove> {
    let Some(token) = board.get(from.row, from.col).and_then(Token::from_cell) else {
        return Vec::new();
    };
    if !legal_tile(from.row, from.col) {
        return Vec::new();
    }

    let orientations: &[Orientation] = if king_map.get(from.row, from.collapsed_col()) == Some(true) {
        &[Orientation::Forward, Orientation::Backward]
    } else {
        &[Orientation::Forward]
    };

    let collapsed = (from.row, from.collapsed_col());
    let mut out = Vec::new();
    for &orientation in orientations {
        let heading = orientation.heading_for(token);
        let frame = Frame {
            heading,
            height: board.height(),
            width: board.width(),
        };
        let origin = frame.map(from);
        let (row, col) = (origin.row, origin.collapsed_col());
        let frame_width = board.width() / 2;

        for direction in [Direction::Straight, Direction::Diagonal] {
            if !step_map_toward(board, token, direction, heading)[collapsed] {
                continue;
            }
            if let Some(target) = step_target(row, col, direction, frame_width) {
                out.push(PlannedMove {
                    from,
                    to: frame.square(target),
                    action: Action::Step {
                        direction,
                        orientation,
                    },
                });
            }
        }

        for side in [JumpSide::Left, JumpSide::Right] {
            if !jump_map_toward(board, token, side, heading)[collapsed] {
                continue;
            }
            let frame_side = match heading {
                Heading::Up => side,
                Heading::Down => side.mirrored(),
            };
            if let Some(path) = jump_path(row, col, frame_side, frame_width) {
                out.push(PlannedMove {
                    from,
                    to: frame.square(path.landing),
                    action: Action::Jump {
                        side,
                        orientation,
                        captured: frame.square(path.jumped),
                    },
                });
            }
        }
    }
    out
}

/// Every legal move of every `token` piece, in reading order of origin.
pub fn planned_moves_for(board: &Board, king_map: &KingMap, token: Token) -> Vec<PlannedMove> {
    board
        .cells()
        .filter(|(_, _, cell)| *cell == token.cell())
        .flat_map(|(row, col, _)| planned_moves_from(board, king_map, Position::new(row, col)))
        .collect()
}

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> MoveGenResult<Vec<GeneratedMove>> {
        let mut generated = Vec::new();
        for planned in game_state.legal_moves() {
            let next = game_state.apply_planned(&planned).map_err(|e| {
                MoveGenerationError::InvalidState(format!("apply_planned failed: {e}"))
            })?;
            let crowned = !game_state.is_king(planned.from) && next.is_king(planned.to);
            generated.push(GeneratedMove {
                action: TurnAction::Play(planned),
                game_after_move: next,
                crowned,
            });
        }
        if game_state.pending_jump.is_some() && !game_state.status.is_finished() {
            generated.push(GeneratedMove {
                action: TurnAction::EndTurn,
                game_after_move: game_state.end_turn()?,
                crowned: false,
            });
        }
        Ok(generated)
    }
}
