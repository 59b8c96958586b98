//! Structural checks for boards and king maps.
//!
//! The rules engine assumes well-formed input and does not call these itself.
//! They back the notation parser's callers, the playout harness and tests.

use crate::checkers_errors::BoardError;
use crate::game_state::board_model::{collapse_board, legal_tile};
use crate::game_state::checkers_types::{Board, KingMap, Position, Token, EMPTY};
use crate::move_generation::game_outcome::player_win;

/// Fails when `board` holds a value other than 0/1/2, has a token on an
/// unplayable tile, or has no tokens of either side left.
pub fn validate_board(board: &Board) -> Result<(), BoardError> {
    if board.height() == 0 {
        return Err(BoardError::Empty);
    }
    for (row, col, value) in board.cells() {
        let position = Position::new(row, col);
        if value != EMPTY && Token::from_cell(value).is_none() {
            return Err(BoardError::InvalidToken { position, value });
        }
        if value != EMPTY && !legal_tile(row, col) {
            return Err(BoardError::OccupiedBlankTile(position));
        }
    }
    if player_win(Token::One, board) && player_win(Token::Two, board) {
        return Err(BoardError::WinningForBoth);
    }
    Ok(())
}

/// Fails unless `king_map` has collapsed dimensions for `board` and every
/// flag sits on an occupied square.
pub fn validate_king_map(board: &Board, king_map: &KingMap) -> Result<(), BoardError> {
    let (expected_height, expected_width) = (board.height(), board.width() / 2);
    if king_map.height() != expected_height || king_map.width() != expected_width {
        return Err(BoardError::KingMapSize {
            expected_height,
            expected_width,
            found_height: king_map.height(),
            found_width: king_map.width(),
        });
    }
    let collapsed = collapse_board(board);
    match king_map
        .cells()
        .find(|&(row, col, kinged)| kinged && collapsed[(row, col)] == EMPTY)
    {
        Some((row, col, _)) => Err(BoardError::OrphanKing { row, col }),
        None => Ok(()),
    }
}
