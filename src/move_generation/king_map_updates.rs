//! King-map bookkeeping.
//!
//! The king map carries no token identity, only a flag per collapsed square.
//! Each update here mirrors one board mutation from `legal_move_apply` and must
//! be applied in lockstep with it so the flag travels with its piece.

use crate::game_state::board_model::{collapse_board, jump_path, step_target, with_perspective};
use crate::game_state::checkers_types::{
    Board, Direction, Heading, JumpSide, KingMap, Position, Token,
};

/// Moves a king flag one row toward row 0. No-op unless the origin is kinged.
pub fn update_king_map_move(
    col: usize,
    row: usize,
    direction: Direction,
    king_map: &KingMap,
) -> KingMap {
    let c = col / 2;
    if king_map.get(row, c) != Some(true) {
        return king_map.clone();
    }
    match step_target(row, c, direction, king_map.width()) {
        Some((to_row, to_col)) => king_map.with(to_row, to_col, true).with(row, c, false),
        None => king_map.clone(),
    }
}

/// Moves a king flag one row away from row 0.
pub fn update_king_map_top(
    col: usize,
    row: usize,
    direction: Direction,
    king_map: &KingMap,
) -> KingMap {
    let Some(mirrored) = mirrored_origin(king_map, row, col) else {
        return king_map.clone();
    };
    with_perspective(king_map, Heading::Down, |frame| {
        update_king_map_move(mirrored.col, mirrored.row, direction, frame)
    })
}

/// Carries the origin's flag two rows toward row 0 and clears the captured
/// square, so a captured king loses its crown with its piece.
pub fn update_king_map_jump(col: usize, row: usize, side: JumpSide, king_map: &KingMap) -> KingMap {
    let c = col / 2;
    let Some(current) = king_map.get(row, c) else {
        return king_map.clone();
    };
    let Some(path) = jump_path(row, c, side, king_map.width()) else {
        return king_map.clone();
    };
    let mut next = king_map.clone();
    next.set(path.landing.0, path.landing.1, current);
    next.set(path.jumped.0, path.jumped.1, false);
    next.set(row, c, false);
    next
}

/// `update_king_map_jump` away from row 0; `side` is the absolute board side.
pub fn update_king_jump_top(col: usize, row: usize, side: JumpSide, king_map: &KingMap) -> KingMap {
    let Some(mirrored) = mirrored_origin(king_map, row, col) else {
        return king_map.clone();
    };
    with_perspective(king_map, Heading::Down, |frame| {
        update_king_map_jump(mirrored.col, mirrored.row, side.mirrored(), frame)
    })
}

pub fn update_king_map_step(
    col: usize,
    row: usize,
    direction: Direction,
    heading: Heading,
    king_map: &KingMap,
) -> KingMap {
    match heading {
        Heading::Up => update_king_map_move(col, row, direction, king_map),
        Heading::Down => update_king_map_top(col, row, direction, king_map),
    }
}

pub fn update_king_map_capture(
    col: usize,
    row: usize,
    side: JumpSide,
    heading: Heading,
    king_map: &KingMap,
) -> KingMap {
    match heading {
        Heading::Up => update_king_map_jump(col, row, side, king_map),
        Heading::Down => update_king_jump_top(col, row, side, king_map),
    }
}

/// Origin in the rotated frame, or `None` when it is off the grid.
fn mirrored_origin(king_map: &KingMap, row: usize, col: usize) -> Option<Position> {
    let (height, width) = (king_map.height(), king_map.width() * 2);
    (row < height && col < width).then(|| Position::new(row, col).flipped(height, width))
}

/// Crowns every token standing on its crowning row: player two on row 0,
/// player one on the last row.
pub fn crown_player(board: &Board, king_map: &KingMap) -> KingMap {
    let collapsed = collapse_board(board);
    if collapsed.height() == 0 {
        return king_map.clone();
    }
    let mut next = king_map.clone();
    for token in [Token::Two, Token::One] {
        let row = token.crowning_row(collapsed.height());
        let Some(cells) = collapsed.row(row) else {
            continue;
        };
        for (col, cell) in cells.iter().enumerate() {
            if *cell == token.cell() {
                next.set(row, col, true);
            }
        }
    }
    next
}
