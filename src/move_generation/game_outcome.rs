//! Terminal-state detection: wins, blocked sides, and the combined finish check.

use crate::game_state::checkers_types::{
    Board, Direction, GameStatus, JumpSide, KingMap, MoveMap, Orientation, Token,
};
use crate::move_generation::legal_move_checks::{
    jump_map_toward, player_jump, player_move, step_map_toward,
};

/// True when no token of `player`'s opponent is left on the board.
pub fn player_win(player: Token, board: &Board) -> bool {
    !board.contains(player.opposite().cell())
}

/// True when some square is set in both maps.
pub fn compare_maps(moves: &MoveMap, king_map: &KingMap) -> bool {
    moves
        .cells()
        .any(|(row, col, allowed)| allowed && king_map.get(row, col) == Some(true))
}

/// Whether one of `token`'s kings can step backward.
pub fn king_backwards_move_check(token: Token, board: &Board, king_map: &KingMap) -> bool {
    let heading = Orientation::Backward.heading_for(token);
    [Direction::Straight, Direction::Diagonal]
        .into_iter()
        .any(|direction| compare_maps(&step_map_toward(board, token, direction, heading), king_map))
}

/// Whether one of `token`'s kings can jump backward.
pub fn king_backwards_jump_check(token: Token, board: &Board, king_map: &KingMap) -> bool {
    let heading = Orientation::Backward.heading_for(token);
    [JumpSide::Left, JumpSide::Right]
        .into_iter()
        .any(|side| compare_maps(&jump_map_toward(board, token, side, heading), king_map))
}

/// True when `token` has no forward move or jump and no king can go backward.
pub fn player_draw(token: Token, board: &Board, king_map: &KingMap) -> bool {
    let forward = token.forward_heading();
    !player_move(board, token, forward)
        && !player_jump(board, token, forward)
        && !king_backwards_move_check(token, board, king_map)
        && !king_backwards_jump_check(token, board, king_map)
}

/// The side to move is stuck.
pub fn game_draw(board: &Board, king_map: &KingMap, current: Token) -> bool {
    player_draw(current, board, king_map)
}

/// True when either player has won or `current` cannot act.
pub fn check_finish(board: &Board, king_map: &KingMap, current: Token) -> bool {
    player_win(Token::One, board)
        || player_win(Token::Two, board)
        || game_draw(board, king_map, current)
}

/// Classifies the position for the side to move.
///
/// A board with no tokens at all counts as a draw.
pub fn game_status(board: &Board, king_map: &KingMap, current: Token) -> GameStatus {
    match (player_win(Token::One, board), player_win(Token::Two, board)) {
        (true, true) => GameStatus::Draw,
        (true, false) => GameStatus::Won(Token::One),
        (false, true) => GameStatus::Won(Token::Two),
        (false, false) if game_draw(board, king_map, current) => GameStatus::Draw,
        (false, false) => GameStatus::InProgress,
    }
}
