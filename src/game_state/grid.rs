//! Rectangular row-major grid shared by boards, king maps and query maps.
//!
//! Every engine operation reads a grid by reference and builds a new one, so
//! the caller's values are never changed behind its back.

use std::ops::Index;

use crate::checkers_errors::BoardError;
use crate::game_state::checkers_types::Cell;

/// A board of cells, `height` rows by `width` columns.
pub type Board = Grid<Cell>;

/// Kinged flags in collapsed coordinates (`height` rows by `width / 2` columns).
pub type KingMap = Grid<bool>;

/// Result of a legality query in collapsed coordinates.
pub type MoveMap = Grid<bool>;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Grid<T> {
    rows: Vec<Vec<T>>,
}

impl<T: Copy> Grid<T> {
    pub fn filled(height: usize, width: usize, value: T) -> Self {
        Self {
            rows: vec![vec![value; width]; height],
        }
    }

    /// Builds a grid from raw rows, rejecting ragged input.
    pub fn try_from_rows(rows: Vec<Vec<T>>) -> Result<Self, BoardError> {
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if let Some(row) = rows.iter().position(|r| r.len() != width) {
            return Err(BoardError::NotRectangular {
                row,
                expected: width,
                found: rows[row].len(),
            });
        }
        Ok(Self { rows })
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Overwrites one cell in place. Out-of-range writes are ignored.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        if let Some(cell) = self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = value;
        }
    }

    /// Copy of this grid with one cell replaced.
    pub fn with(&self, row: usize, col: usize, value: T) -> Self {
        let mut next = self.clone();
        next.set(row, col, value);
        next
    }

    #[inline]
    pub fn rows(&self) -> &[Vec<T>] {
        &self.rows
    }

    /// One row, or `None` past the bottom edge.
    #[inline]
    pub fn row(&self, row: usize) -> Option<&[T]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    pub fn into_rows(self) -> Vec<Vec<T>> {
        self.rows
    }

    /// Iterates `(row, col, value)` in reading order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(r, row)| row.iter().enumerate().map(move |(c, v)| (r, c, *v)))
    }

    pub fn map<U: Copy>(&self, mut f: impl FnMut(usize, usize, T) -> U) -> Grid<U> {
        Grid {
            rows: self
                .rows
                .iter()
                .enumerate()
                .map(|(r, row)| row.iter().enumerate().map(|(c, v)| f(r, c, *v)).collect())
                .collect(),
        }
    }

    /// Rotation by 180 degrees: rows and columns both reversed.
    pub fn rotated(&self) -> Self {
        Self {
            rows: self
                .rows
                .iter()
                .rev()
                .map(|row| row.iter().rev().copied().collect())
                .collect(),
        }
    }

    pub fn any(&self, mut pred: impl FnMut(T) -> bool) -> bool {
        self.rows.iter().flatten().any(|v| pred(*v))
    }
}

impl<T: Copy + PartialEq> Grid<T> {
    pub fn contains(&self, value: T) -> bool {
        self.any(|v| v == value)
    }

    pub fn count(&self, value: T) -> usize {
        self.rows.iter().flatten().filter(|v| **v == value).count()
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.rows[row][col]
    }
}
