use crate::checkers_errors::MoveError;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::PlannedMove;

pub type MoveGenResult<T> = Result<T, MoveGenerationError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveGenerationError {
    #[error("invalid game state: {0}")]
    InvalidState(String),

    #[error(transparent)]
    Move(#[from] MoveError),
}

/// One thing the side to move may do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnAction {
    Play(PlannedMove),
    /// Stop a jump chain early and hand the turn over.
    EndTurn,
}

impl TurnAction {
    #[inline]
    pub fn is_capture(&self) -> bool {
        matches!(self, TurnAction::Play(planned) if planned.is_capture())
    }
}

#[derive(Debug, Clone)]
pub struct GeneratedMove {
    pub action: TurnAction,
    pub game_after_move: GameState,
    /// The moving man was crowned at the end of this action.
    pub crowned: bool,
}

pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, game_state: &GameState) -> MoveGenResult<Vec<GeneratedMove>>;
}
