//! Board mutations: steps, jumps, and their king-gated wrappers.
//!
//! Every function checks its preconditions against the matching legality
//! query and returns a fresh board, or a `MoveError` saying why nothing
//! happened. The plain forms move toward row 0; the `_down`/`_top` forms
//! rotate the board, delegate, and rotate back.

use crate::checkers_errors::MoveError;
use crate::game_state::board_model::{
    collapse_board, jump_path, legal_tile, reform_board, step_target, try_with_perspective,
};
use crate::game_state::checkers_types::{
    Board, Direction, Heading, JumpSide, KingMap, Orientation, Position, Token, EMPTY,
};
use crate::move_generation::legal_move_checks::{jump_map, step_map};

/// Fails unless `(row, col)` is on the board and holds `token`.
pub fn check_origin(board: &Board, token: Token, row: usize, col: usize) -> Result<(), MoveError> {
    let position = Position::new(row, col);
    match board.get(row, col) {
        None => Err(MoveError::OutOfBounds {
            position,
            height: board.height(),
            width: board.width(),
        }),
        Some(cell) if cell == token.cell() && legal_tile(row, col) => Ok(()),
        Some(_) => Err(MoveError::WrongToken {
            position,
            expected: token,
        }),
    }
}

/// Steps the piece at `(row, col)` one row toward row 0.
pub fn move_piece(
    token: Token,
    col: usize,
    row: usize,
    direction: Direction,
    board: &Board,
) -> Result<Board, MoveError> {
    check_origin(board, token, row, col)?;
    let not_legal = MoveError::StepNotLegal {
        position: Position::new(row, col),
        direction,
    };
    let c = col / 2;
    if !step_map(board, token, direction)[(row, c)] {
        log::debug!("{token}: {not_legal}");
        return Err(not_legal);
    }
    let mut collapsed = collapse_board(board);
    let (to_row, to_col) = step_target(row, c, direction, collapsed.width()).ok_or(not_legal)?;
    collapsed.set(row, c, EMPTY);
    collapsed.set(to_row, to_col, token.cell());
    Ok(reform_board(&collapsed))
}

/// Steps the piece at `(row, col)` one row away from row 0.
pub fn move_piece_down(
    token: Token,
    col: usize,
    row: usize,
    direction: Direction,
    board: &Board,
) -> Result<Board, MoveError> {
    check_origin(board, token, row, col)?;
    let (height, width) = (board.height(), board.width());
    let mirrored = Position::new(row, col).flipped(height, width);
    try_with_perspective(board, Heading::Down, |frame| {
        move_piece(token, mirrored.col, mirrored.row, direction, frame)
    })
    .map_err(|e| e.flipped(height, width))
}

/// Jumps the piece at `(row, col)` two rows toward row 0, removing the
/// opponent token it passes over.
pub fn jump_piece_bottom(
    token: Token,
    col: usize,
    row: usize,
    side: JumpSide,
    board: &Board,
) -> Result<Board, MoveError> {
    check_origin(board, token, row, col)?;
    let not_legal = MoveError::JumpNotLegal {
        position: Position::new(row, col),
        side,
    };
    let c = col / 2;
    if !jump_map(board, token, side)[(row, c)] {
        log::debug!("{token}: {not_legal}");
        return Err(not_legal);
    }
    let mut collapsed = collapse_board(board);
    let path = jump_path(row, c, side, collapsed.width()).ok_or(not_legal)?;
    collapsed.set(row, c, EMPTY);
    collapsed.set(path.jumped.0, path.jumped.1, EMPTY);
    collapsed.set(path.landing.0, path.landing.1, token.cell());
    Ok(reform_board(&collapsed))
}

/// Jumps the piece at `(row, col)` two rows away from row 0. `side` is the
/// absolute board side; it swaps inside the rotated frame.
pub fn jump_piece_top(
    token: Token,
    col: usize,
    row: usize,
    side: JumpSide,
    board: &Board,
) -> Result<Board, MoveError> {
    check_origin(board, token, row, col)?;
    let (height, width) = (board.height(), board.width());
    let mirrored = Position::new(row, col).flipped(height, width);
    try_with_perspective(board, Heading::Down, |frame| {
        jump_piece_bottom(token, mirrored.col, mirrored.row, side.mirrored(), frame)
    })
    .map_err(|e| e.flipped(height, width))
}

/// Step along a board-absolute heading.
pub fn advance_piece(
    token: Token,
    col: usize,
    row: usize,
    direction: Direction,
    heading: Heading,
    board: &Board,
) -> Result<Board, MoveError> {
    match heading {
        Heading::Up => move_piece(token, col, row, direction, board),
        Heading::Down => move_piece_down(token, col, row, direction, board),
    }
}

/// Jump along a board-absolute heading.
pub fn capture_piece(
    token: Token,
    col: usize,
    row: usize,
    side: JumpSide,
    heading: Heading,
    board: &Board,
) -> Result<Board, MoveError> {
    match heading {
        Heading::Up => jump_piece_bottom(token, col, row, side, board),
        Heading::Down => jump_piece_top(token, col, row, side, board),
    }
}

fn check_king(king_map: &KingMap, row: usize, col: usize) -> Result<(), MoveError> {
    if king_map.get(row, col / 2) == Some(true) {
        Ok(())
    } else {
        log::debug!("king move requested from uncrowned square ({row}, {col})");
        Err(MoveError::NotAKing(Position::new(row, col)))
    }
}

/// Steps a king in either orientation relative to its owner.
pub fn move_king(
    token: Token,
    col: usize,
    row: usize,
    direction: Direction,
    orientation: Orientation,
    board: &Board,
    king_map: &KingMap,
) -> Result<Board, MoveError> {
    check_origin(board, token, row, col)?;
    check_king(king_map, row, col)?;
    advance_piece(token, col, row, direction, orientation.heading_for(token), board)
}

/// Jumps with a king in either orientation relative to its owner.
pub fn jump_king(
    token: Token,
    col: usize,
    row: usize,
    side: JumpSide,
    orientation: Orientation,
    board: &Board,
    king_map: &KingMap,
) -> Result<Board, MoveError> {
    check_origin(board, token, row, col)?;
    check_king(king_map, row, col)?;
    capture_piece(token, col, row, side, orientation.heading_for(token), board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board_model::{empty_board, empty_king_map, populate};
    use crate::utils::board_notation::parse_board;
    use crate::utils::board_validation::validate_board;

    const ODD_ROW_BOARD: &str = "01010101/10101010/01010101/00000000/00000100/20202020/02020202/20202020";
    const EVEN_ROW_BOARD: &str = "01010101/10101010/01010101/00000000/00000000/00100000/02020202/20202020";

    fn assert_good_jump(board: &Board, row: usize, col: usize, side: JumpSide) {
        let jumped = jump_piece_bottom(Token::Two, col, row, side, board).expect("jump is legal");
        validate_board(&jumped).expect("board stays valid");
        let (land_col, over_col) = match side {
            JumpSide::Left => (col - 2, col - 1),
            JumpSide::Right => (col + 2, col + 1),
        };
        assert_eq!(jumped[(row, col)], EMPTY, "origin must be cleared");
        assert_eq!(jumped[(row - 2, land_col)], 2, "token must land two rows up");
        assert_eq!(jumped[(row - 1, over_col)], EMPTY, "jumped token must be removed");
        assert_eq!(jumped.count(1), board.count(1) - 1);
    }

    #[test]
    fn jumping_mechanic_is_executed_correctly() {
        let odd = parse_board(ODD_ROW_BOARD).expect("fixture parses");
        let even = parse_board(EVEN_ROW_BOARD).expect("fixture parses");
        assert_good_jump(&odd, 5, 6, JumpSide::Left);
        assert_good_jump(&odd, 5, 4, JumpSide::Right);
        assert_good_jump(&even, 6, 1, JumpSide::Right);
        assert_good_jump(&even, 6, 3, JumpSide::Left);
    }

    #[test]
    fn steps_up_and_down() {
        let board = populate(&empty_board(8, 8));
        // (5, 2) sits on an odd row: straight keeps collapsed column 1, which is
        // full column 3 on the even row above; the diagonal is its `L` option.
        let moved = move_piece(Token::Two, 2, 5, Direction::Straight, &board).expect("legal");
        assert_eq!(moved[(5, 2)], EMPTY);
        assert_eq!(moved[(4, 3)], 2);
        assert_eq!(moved.count(2), 12);

        let moved = move_piece(Token::Two, 2, 5, Direction::Diagonal, &board).expect("legal");
        assert_eq!(moved[(4, 1)], 2);
        assert_eq!(moved[(4, 3)], EMPTY);

        let down = move_piece_down(Token::One, 1, 2, Direction::Straight, &board).expect("legal");
        assert_eq!(down[(2, 1)], EMPTY);
        assert_eq!(down[(3, 0)], 1);
        let down = move_piece_down(Token::One, 1, 2, Direction::Diagonal, &board).expect("legal");
        assert_eq!(down[(3, 2)], 1);
    }

    #[test]
    fn illegal_steps_leave_no_token_behind() {
        let board = populate(&empty_board(8, 8));
        // Blocked by its own row.
        assert_eq!(
            move_piece(Token::Two, 1, 6, Direction::Straight, &board),
            Err(MoveError::StepNotLegal {
                position: Position::new(6, 1),
                direction: Direction::Straight,
            })
        );
        // Wrong owner.
        assert_eq!(
            move_piece(Token::One, 2, 5, Direction::Straight, &board),
            Err(MoveError::WrongToken {
                position: Position::new(5, 2),
                expected: Token::One,
            })
        );
        // Edge tile has no diagonal.
        assert!(move_piece(Token::Two, 0, 5, Direction::Diagonal, &board).is_err());
        // Off the board.
        assert!(matches!(
            move_piece(Token::Two, 9, 5, Direction::Straight, &board),
            Err(MoveError::OutOfBounds { .. })
        ));
        // Player one cannot step toward row 0 from its home rows.
        assert!(move_piece(Token::One, 1, 2, Direction::Straight, &board).is_err());
    }

    #[test]
    fn errors_inside_the_flipped_frame_use_board_coordinates() {
        let board = populate(&empty_board(8, 8));
        assert_eq!(
            move_piece_down(Token::One, 0, 1, Direction::Straight, &board),
            Err(MoveError::StepNotLegal {
                position: Position::new(1, 0),
                direction: Direction::Straight,
            })
        );
        assert_eq!(
            jump_piece_top(Token::One, 3, 2, JumpSide::Left, &board),
            Err(MoveError::JumpNotLegal {
                position: Position::new(2, 3),
                side: JumpSide::Left,
            })
        );
    }

    #[test]
    fn jump_piece_top_keeps_absolute_sides() {
        let board = parse_board("00000000/00000000/00000000/00001000/00020000/00000000/00000000/00000000")
            .expect("fixture parses");
        let jumped = jump_piece_top(Token::One, 4, 3, JumpSide::Left, &board).expect("legal");
        assert_eq!(jumped[(3, 4)], EMPTY);
        assert_eq!(jumped[(4, 3)], EMPTY);
        assert_eq!(jumped[(5, 2)], 1);
        assert!(jump_piece_top(Token::One, 4, 3, JumpSide::Right, &board).is_err());
    }

    #[test]
    fn move_king_requires_a_crown() {
        let board = parse_board("00000000/00000000/00000000/00000000/00000000/00000000/00000000/20000000")
            .expect("fixture parses");
        let plain = empty_king_map(8, 8);
        assert_eq!(
            move_king(Token::Two, 0, 7, Direction::Straight, Orientation::Forward, &board, &plain),
            Err(MoveError::NotAKing(Position::new(7, 0)))
        );

        let crowned = plain.with(7, 0, true);
        let forward =
            move_king(Token::Two, 0, 7, Direction::Straight, Orientation::Forward, &board, &crowned)
                .expect("king may advance");
        assert_eq!(forward[(6, 1)], 2);
        // Backward from the bottom row would leave the board.
        assert!(
            move_king(Token::Two, 0, 7, Direction::Straight, Orientation::Backward, &board, &crowned)
                .is_err()
        );
    }

    #[test]
    fn jump_king_captures_backward() {
        let board = empty_board(8, 8)
            .with(2, 3, 2)
            .with(3, 4, 1);
        let king_map = empty_king_map(8, 8).with(2, 1, true);
        let jumped =
            jump_king(Token::Two, 3, 2, JumpSide::Right, Orientation::Backward, &board, &king_map)
                .expect("king may capture backward");
        assert_eq!(jumped[(4, 5)], 2);
        assert_eq!(jumped[(3, 4)], EMPTY);
        assert_eq!(jumped[(2, 3)], EMPTY);
    }
}
