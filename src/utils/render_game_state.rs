//! Terminal-oriented board renderer.
//!
//! Creates a human-readable view of a game for debugging, tests, and the
//! command-line tools.

use crate::game_state::board_model::legal_tile;
use crate::game_state::checkers_types::Token;
use crate::game_state::game_state::GameState;

/// Render the board to a string for terminal output.
///
/// Unplayable tiles show as `·`, empty playable tiles as `.`, player one as
/// `r` and player two as `y`. Kings are upper-cased.
pub fn render_game_state(game_state: &GameState) -> String {
    let width = game_state.board.width();
    let mut out = String::new();

    out.push_str("  ");
    for col in 0..width {
        out.push(column_label(col));
        if col + 1 < width {
            out.push(' ');
        }
    }
    out.push('\n');

    for (row, cells) in game_state.board.rows().iter().enumerate() {
        out.push_str(&format!("{:<2}", row % 100));
        for (col, &cell) in cells.iter().enumerate() {
            let ch = match Token::from_cell(cell) {
                _ if !legal_tile(row, col) => '·',
                None => '.',
                Some(token) => {
                    let king = game_state.king_map.get(row, col / 2) == Some(true);
                    token_char(token, king)
                }
            };
            out.push(ch);
            if col + 1 < width {
                out.push(' ');
            }
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "{} to move, {:?}",
        game_state.current_player, game_state.status
    ));

    out
}

fn column_label(col: usize) -> char {
    char::from_digit((col % 36) as u32, 36).unwrap_or('?')
}

fn token_char(token: Token, king: bool) -> char {
    match (token, king) {
        (Token::One, false) => 'r',
        (Token::One, true) => 'R',
        (Token::Two, false) => 'y',
        (Token::Two, true) => 'Y',
    }
}
