//! Board and king-map construction plus the structural transforms the rules
//! engine is built on.
//!
//! Only half of the squares on a draughts board are playable. The "collapsed"
//! form keeps just those squares, `width / 2` per row, indexed so that column
//! `c` of row `r` is the full-board column `2c + 1` on even rows and `2c` on
//! odd rows. King maps and query maps always use collapsed coordinates.
//!
//! Dimensions are expected to be positive even numbers; nothing here guards
//! against other shapes (see `GameConfig::validate`).

use crate::game_state::checkers_rules::HOME_ROWS;
use crate::game_state::checkers_types::{
    Board, Direction, Grid, Heading, JumpSide, KingMap, MoveLabel, Token, EMPTY,
};

/// Collapsed coordinate `(row, col)`.
pub type CollapsedSquare = (usize, usize);

pub fn empty_board(height: usize, width: usize) -> Board {
    Grid::filled(height, width, EMPTY)
}

/// King map matching a `height` x `width` board, with every flag cleared.
pub fn empty_king_map(height: usize, width: usize) -> KingMap {
    Grid::filled(height, width / 2, false)
}

/// Places the opening position: player one on the top `HOME_ROWS` rows, player
/// two on the bottom `HOME_ROWS` rows, middle rows untouched.
pub fn populate(board: &Board) -> Board {
    let bottom = with_perspective(board, Heading::Down, |flipped| {
        fill_home_rows(Token::Two, flipped)
    });
    fill_home_rows(Token::One, &bottom)
}

/// Overwrites the top `HOME_ROWS` rows with `token` on playable tiles.
fn fill_home_rows(token: Token, board: &Board) -> Board {
    board.map(|row, col, cell| {
        if row >= HOME_ROWS {
            cell
        } else if legal_tile(row, col) {
            token.cell()
        } else {
            EMPTY
        }
    })
}

/// Keeps only the playable tiles of each row.
pub fn collapse_board<T: Copy>(board: &Grid<T>) -> Grid<T> {
    let collapsed_width = board.width() / 2;
    Grid::filled(board.height(), collapsed_width, ()).map(|row, col, ()| {
        board[(row, full_col(row, col))]
    })
}

/// Inverse of `collapse_board`: re-inserts the unplayable tiles as `T::default()`.
pub fn reform_board<T: Copy + Default>(collapsed: &Grid<T>) -> Grid<T> {
    let width = collapsed.width() * 2;
    Grid::filled(collapsed.height(), width, ()).map(|row, col, ()| {
        if legal_tile(row, col) {
            collapsed[(row, col / 2)]
        } else {
            T::default()
        }
    })
}

/// Rotates a board (or any grid) by 180 degrees. Applying it twice is the identity.
pub fn flip_board<T: Copy>(board: &Grid<T>) -> Grid<T> {
    board.rotated()
}

/// Runs `f` on the grid as seen from `heading`.
///
/// Every primitive query and mutation works toward row 0. For `Heading::Down`
/// the grid is flipped, handed to `f`, and the result is flipped back.
pub fn with_perspective<T: Copy, U: Copy>(
    grid: &Grid<T>,
    heading: Heading,
    f: impl FnOnce(&Grid<T>) -> Grid<U>,
) -> Grid<U> {
    match heading {
        Heading::Up => f(grid),
        Heading::Down => flip_board(&f(&flip_board(grid))),
    }
}

/// Fallible form of `with_perspective`.
pub fn try_with_perspective<T: Copy, U: Copy, E>(
    grid: &Grid<T>,
    heading: Heading,
    f: impl FnOnce(&Grid<T>) -> Result<Grid<U>, E>,
) -> Result<Grid<U>, E> {
    match heading {
        Heading::Up => f(grid),
        Heading::Down => f(&flip_board(grid)).map(|g| flip_board(&g)),
    }
}

/// True for squares that may ever hold a token.
#[inline]
pub fn legal_tile(row: usize, col: usize) -> bool {
    (row + col) % 2 == 1
}

/// Full-board column of collapsed column `col` on `row`.
#[inline]
pub fn full_col(row: usize, col: usize) -> usize {
    if row % 2 == 0 {
        2 * col + 1
    } else {
        2 * col
    }
}

/// Lateral option of collapsed column `col` on `row` in a row `width` tiles wide.
#[inline]
pub fn move_label(row: usize, col: usize, width: usize) -> MoveLabel {
    if row % 2 == 0 {
        if col + 1 == width {
            MoveLabel::S
        } else {
            MoveLabel::R
        }
    } else if col == 0 {
        MoveLabel::S
    } else {
        MoveLabel::L
    }
}

/// Lateral options for every collapsed column of `row`.
///
/// Even rows read `R, R, .., S`; odd rows read `S, L, .., L`.
pub fn legal_moves(row: usize, width: usize) -> Vec<MoveLabel> {
    (0..width).map(|col| move_label(row, col, width)).collect()
}

/// Destination of a one-row step toward row 0, in collapsed coordinates.
pub fn step_target(
    row: usize,
    col: usize,
    direction: Direction,
    width: usize,
) -> Option<CollapsedSquare> {
    if row == 0 || col >= width {
        return None;
    }
    match direction {
        Direction::Straight => Some((row - 1, col)),
        Direction::Diagonal => match move_label(row, col, width) {
            MoveLabel::L => Some((row - 1, col - 1)),
            MoveLabel::R => Some((row - 1, col + 1)),
            MoveLabel::S => None,
        },
    }
}

/// Squares touched by a jump toward row 0, in collapsed coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JumpPath {
    pub jumped: CollapsedSquare,
    pub landing: CollapsedSquare,
}

pub fn jump_path(row: usize, col: usize, side: JumpSide, width: usize) -> Option<JumpPath> {
    if row < 2 || col >= width {
        return None;
    }
    let odd = row % 2 == 1;
    match side {
        JumpSide::Left => {
            if col == 0 {
                return None;
            }
            let jumped_col = if odd { col - 1 } else { col };
            Some(JumpPath {
                jumped: (row - 1, jumped_col),
                landing: (row - 2, col - 1),
            })
        }
        JumpSide::Right => {
            if col + 1 >= width {
                return None;
            }
            let jumped_col = if odd { col } else { col + 1 };
            Some(JumpPath {
                jumped: (row - 1, jumped_col),
                landing: (row - 2, col + 1),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn collapsed_from(cells: &[u8], width: usize) -> Board {
        Grid::try_from_rows(cells.chunks(width).map(<[u8]>::to_vec).collect())
            .expect("chunks are rectangular")
    }

    #[test]
    fn populate_places_twelve_tokens_per_side() {
        let board = populate(&empty_board(8, 8));
        assert_eq!(board.count(1), 12);
        assert_eq!(board.count(2), 12);
        for (row, col, cell) in board.cells() {
            match row {
                0..=2 => assert_eq!(cell == 1, legal_tile(row, col)),
                5..=7 => assert_eq!(cell == 2, legal_tile(row, col)),
                _ => assert_eq!(cell, EMPTY),
            }
        }
        assert_eq!(board.row(0), Some(&[0, 1, 0, 1, 0, 1, 0, 1][..]));
        assert_eq!(board.row(1), Some(&[1, 0, 1, 0, 1, 0, 1, 0][..]));
        assert_eq!(board.row(7), Some(&[2, 0, 2, 0, 2, 0, 2, 0][..]));
    }

    #[test]
    fn collapse_keeps_playable_tiles_in_reading_order() {
        // Values above 2 are fine here: collapse is purely structural.
        let mut rows = vec![vec![0u8; 8]; 8];
        rows[0] = vec![0, 1, 0, 2, 0, 3, 0, 4];
        rows[1] = vec![5, 0, 6, 0, 7, 0, 8, 0];
        let board = Grid::try_from_rows(rows).expect("rows are rectangular");
        let collapsed = collapse_board(&board);
        assert_eq!(collapsed.width(), 4);
        assert_eq!(collapsed.row(0), Some(&[1, 2, 3, 4][..]));
        assert_eq!(collapsed.row(1), Some(&[5, 6, 7, 8][..]));
        assert_eq!(reform_board(&collapsed), board);
    }

    #[test]
    fn king_map_is_half_width() {
        let king_map = empty_king_map(8, 8);
        assert_eq!(king_map.height(), 8);
        assert_eq!(king_map.width(), 4);
        assert!(!king_map.contains(true));
    }

    #[test]
    fn legal_move_labels_alternate_by_row_parity() {
        use MoveLabel::*;
        assert_eq!(legal_moves(0, 4), vec![R, R, R, S]);
        assert_eq!(legal_moves(1, 4), vec![S, L, L, L]);
        assert_eq!(legal_moves(6, 4), vec![R, R, R, S]);
        assert_eq!(legal_moves(7, 4), vec![S, L, L, L]);
    }

    #[test]
    fn legal_tiles_alternate() {
        assert!(legal_tile(0, 1));
        assert!(!legal_tile(0, 0));
        assert!(legal_tile(1, 0));
        assert!(!legal_tile(7, 7));
    }

    #[test]
    fn step_targets_follow_labels() {
        assert_eq!(step_target(0, 1, Direction::Straight, 4), None);
        assert_eq!(step_target(5, 2, Direction::Straight, 4), Some((4, 2)));
        assert_eq!(step_target(5, 2, Direction::Diagonal, 4), Some((4, 1)));
        assert_eq!(step_target(5, 0, Direction::Diagonal, 4), None);
        assert_eq!(step_target(6, 1, Direction::Diagonal, 4), Some((5, 2)));
        assert_eq!(step_target(6, 3, Direction::Diagonal, 4), None);
    }

    #[test]
    fn jump_paths_depend_on_row_parity() {
        assert_eq!(
            jump_path(5, 3, JumpSide::Left, 4),
            Some(JumpPath {
                jumped: (4, 2),
                landing: (3, 2)
            })
        );
        assert_eq!(
            jump_path(6, 1, JumpSide::Left, 4),
            Some(JumpPath {
                jumped: (5, 1),
                landing: (4, 0)
            })
        );
        assert_eq!(
            jump_path(6, 0, JumpSide::Right, 4),
            Some(JumpPath {
                jumped: (5, 1),
                landing: (4, 1)
            })
        );
        assert_eq!(jump_path(1, 1, JumpSide::Right, 4), None);
        assert_eq!(jump_path(5, 0, JumpSide::Left, 4), None);
        assert_eq!(jump_path(4, 3, JumpSide::Right, 4), None);
    }

    #[test]
    fn perspective_down_sees_a_flipped_board() {
        let board = populate(&empty_board(8, 8));
        let seen = with_perspective(&board, Heading::Down, |flipped| {
            assert_eq!(flipped[(0, 0)], 2);
            flipped.clone()
        });
        assert_eq!(seen, board);
    }

    proptest! {
        #[test]
        fn reform_inverts_collapse(cells in prop::collection::vec(0u8..3, 32)) {
            let collapsed = collapsed_from(&cells, 4);
            let board = reform_board(&collapsed);
            prop_assert_eq!(collapse_board(&board), collapsed);
            prop_assert_eq!(reform_board(&collapse_board(&board)), board);
        }

        #[test]
        fn flip_is_an_involution(cells in prop::collection::vec(0u8..3, 64)) {
            let board = collapsed_from(&cells, 8);
            prop_assert_eq!(flip_board(&flip_board(&board)), board);
        }

        #[test]
        fn flipping_keeps_tokens_on_playable_tiles(cells in prop::collection::vec(0u8..3, 32)) {
            let board = flip_board(&reform_board(&collapsed_from(&cells, 4)));
            for (row, col, cell) in board.cells() {
                prop_assert!(legal_tile(row, col) || cell == EMPTY);
            }
        }
    }
}
