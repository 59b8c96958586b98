//! Legality queries.
//!
//! Each query answers "which of `token`'s pieces can do this" for the whole
//! board at once and returns a collapsed boolean map aligned with the king
//! map. The plain queries look toward row 0; the `_toward` forms take a
//! board-absolute heading and go through `with_perspective`.

use crate::game_state::board_model::{collapse_board, jump_path, step_target, with_perspective};
use crate::game_state::checkers_types::{
    Board, Direction, Heading, JumpSide, MoveMap, Token, EMPTY,
};

/// Pieces of `token` whose straight step toward row 0 is open. Row 0 is always false.
pub fn where_player_can_move_straight(board: &Board, token: Token) -> MoveMap {
    step_map(board, token, Direction::Straight)
}

/// Pieces of `token` whose diagonal step toward row 0 is open.
pub fn check_diagonal(board: &Board, token: Token) -> MoveMap {
    step_map(board, token, Direction::Diagonal)
}

/// Pieces of `token` that can capture by jumping up and to the left. Rows 0 and 1 are always false.
pub fn can_player_jump_left(board: &Board, token: Token) -> MoveMap {
    jump_map(board, token, JumpSide::Left)
}

/// Pieces of `token` that can capture by jumping up and to the right.
pub fn can_player_jump_right(board: &Board, token: Token) -> MoveMap {
    jump_map(board, token, JumpSide::Right)
}

pub fn step_map(board: &Board, token: Token, direction: Direction) -> MoveMap {
    let collapsed = collapse_board(board);
    let width = collapsed.width();
    collapsed.map(|row, col, cell| {
        cell == token.cell()
            && step_target(row, col, direction, width)
                .is_some_and(|target| collapsed[target] == EMPTY)
    })
}

pub fn jump_map(board: &Board, token: Token, side: JumpSide) -> MoveMap {
    let collapsed = collapse_board(board);
    let width = collapsed.width();
    let opponent = token.opposite().cell();
    collapsed.map(|row, col, cell| {
        cell == token.cell()
            && jump_path(row, col, side, width).is_some_and(|path| {
                collapsed[path.jumped] == opponent && collapsed[path.landing] == EMPTY
            })
    })
}

/// `step_map` for a board-absolute heading.
pub fn step_map_toward(
    board: &Board,
    token: Token,
    direction: Direction,
    heading: Heading,
) -> MoveMap {
    with_perspective(board, heading, |frame| step_map(frame, token, direction))
}

/// `jump_map` for a board-absolute heading. `side` is absolute too, so it is
/// mirrored inside a flipped frame.
pub fn jump_map_toward(board: &Board, token: Token, side: JumpSide, heading: Heading) -> MoveMap {
    let frame_side = match heading {
        Heading::Up => side,
        Heading::Down => side.mirrored(),
    };
    with_perspective(board, heading, |frame| jump_map(frame, token, frame_side))
}

/// True when any piece of `token` can step along `heading`.
pub fn player_move(board: &Board, token: Token, heading: Heading) -> bool {
    [Direction::Straight, Direction::Diagonal]
        .into_iter()
        .any(|direction| step_map_toward(board, token, direction, heading).contains(true))
}

/// True when any piece of `token` can jump along `heading`.
pub fn player_jump(board: &Board, token: Token, heading: Heading) -> bool {
    [JumpSide::Left, JumpSide::Right]
        .into_iter()
        .any(|side| jump_map_toward(board, token, side, heading).contains(true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board_model::{empty_board, populate};
    use crate::utils::board_notation::parse_board;

    const ODD_ROW_BOARD: &str = "01010101/10101010/01010101/00000000/00000100/20202020/02020202/20202020";
    const EVEN_ROW_BOARD: &str = "01010101/10101010/01010101/00000000/00000000/00100000/02020202/20202020";

    fn trues(map: &MoveMap) -> Vec<(usize, usize)> {
        map.cells()
            .filter(|(_, _, v)| *v)
            .map(|(r, c, _)| (r, c))
            .collect()
    }

    #[test]
    fn opening_moves_for_player_two() {
        let board = populate(&empty_board(8, 8));
        let straight = where_player_can_move_straight(&board, Token::Two);
        let diagonal = check_diagonal(&board, Token::Two);
        assert_eq!(trues(&straight), vec![(5, 0), (5, 1), (5, 2), (5, 3)]);
        assert_eq!(trues(&diagonal), vec![(5, 1), (5, 2), (5, 3)]);
        assert!(!can_player_jump_left(&board, Token::Two).contains(true));
        assert!(!can_player_jump_right(&board, Token::Two).contains(true));
    }

    #[test]
    fn player_one_only_moves_down_at_the_start() {
        let board = populate(&empty_board(8, 8));
        assert!(!where_player_can_move_straight(&board, Token::One).contains(true));
        assert!(!player_move(&board, Token::One, Heading::Up));
        let straight = step_map_toward(&board, Token::One, Direction::Straight, Heading::Down);
        let diagonal = step_map_toward(&board, Token::One, Direction::Diagonal, Heading::Down);
        assert_eq!(straight.count(true) + diagonal.count(true), 7);
        assert!(straight.row(2).is_some_and(|row| row.iter().all(|v| *v)));
    }

    #[test]
    fn straight_map_is_false_on_row_zero() {
        let board = parse_board("02000000/00000000/00000000/00000000/00000000/00000000/00000000/00000000")
            .expect("fixture parses");
        assert!(!where_player_can_move_straight(&board, Token::Two).contains(true));
        assert!(!check_diagonal(&board, Token::Two).contains(true));
    }

    #[test]
    fn jumps_on_an_odd_row() {
        let board = parse_board(ODD_ROW_BOARD).expect("fixture parses");
        let left = can_player_jump_left(&board, Token::Two);
        let right = can_player_jump_right(&board, Token::Two);
        assert_eq!(trues(&left), vec![(5, 3)]);
        assert_eq!(trues(&right), vec![(5, 2)]);
    }

    #[test]
    fn jumps_on_an_even_row() {
        let board = parse_board(EVEN_ROW_BOARD).expect("fixture parses");
        assert_eq!(trues(&can_player_jump_left(&board, Token::Two)), vec![(6, 1)]);
        assert_eq!(trues(&can_player_jump_right(&board, Token::Two)), vec![(6, 0)]);
    }

    #[test]
    fn downward_jump_sides_are_absolute() {
        // Player one at (3, 4) can capture down-left over (4, 3) and land on (5, 2).
        let board = parse_board("00000000/00000000/00000000/00001000/00020000/00000000/00000000/00000000")
            .expect("fixture parses");
        let left = jump_map_toward(&board, Token::One, JumpSide::Left, Heading::Down);
        let right = jump_map_toward(&board, Token::One, JumpSide::Right, Heading::Down);
        assert_eq!(trues(&left), vec![(3, 2)]);
        assert!(!right.contains(true));
        assert!(player_jump(&board, Token::One, Heading::Down));
        assert!(!player_jump(&board, Token::One, Heading::Up));
    }
}
