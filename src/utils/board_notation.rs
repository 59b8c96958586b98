//! Plain-text board notation.
//!
//! A board is written one row per segment, top row first, one digit per cell
//! (`0` empty, `1` player one, `2` player two). Rows are separated by `/` or by
//! newlines, so both `"0101/1010"` and a multi-line literal parse the same.

use crate::checkers_errors::BoardError;
use crate::game_state::checkers_types::{Board, Cell, Grid};

pub fn parse_board(text: &str) -> Result<Board, BoardError> {
    let rows = text
        .split(|ch: char| ch == '/' || ch == '\n')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(parse_row)
        .collect::<Result<Vec<_>, _>>()?;

    if rows.is_empty() {
        return Err(BoardError::Empty);
    }
    Grid::try_from_rows(rows)
}

fn parse_row(segment: &str) -> Result<Vec<Cell>, BoardError> {
    segment
        .chars()
        .map(|ch| match ch {
            '0'..='2' => Ok(ch as u8 - b'0'),
            found => Err(BoardError::InvalidCharacter { found }),
        })
        .collect()
}

/// Inverse of `parse_board`, using `/` between rows.
pub fn format_board(board: &Board) -> String {
    board
        .rows()
        .iter()
        .map(|row| row.iter().map(|cell| char::from(b'0' + cell)).collect::<String>())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board_model::{empty_board, populate};

    #[test]
    fn opening_position_notation() {
        let board = populate(&empty_board(8, 8));
        assert_eq!(
            format_board(&board),
            "01010101/10101010/01010101/00000000/00000000/20202020/02020202/20202020"
        );
        assert_eq!(parse_board(&format_board(&board)), Ok(board));
    }

    #[test]
    fn newline_separated_rows_parse() {
        let board = parse_board(
            "
            0101
            1010
            ",
        )
        .expect("two rows");
        assert_eq!(board.height(), 2);
        assert_eq!(board.width(), 4);
        assert_eq!(board[(1, 0)], 1);
    }

    #[test]
    fn rejects_malformed_text() {
        assert_eq!(parse_board(""), Err(BoardError::Empty));
        assert_eq!(parse_board(" / "), Err(BoardError::Empty));
        assert_eq!(
            parse_board("0103"),
            Err(BoardError::InvalidCharacter { found: '3' })
        );
        assert_eq!(
            parse_board("0101/101"),
            Err(BoardError::NotRectangular {
                row: 1,
                expected: 4,
                found: 3
            })
        );
    }
}
