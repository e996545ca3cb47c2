use crate::errors::{SearchError, SearchResult};

/// Immutable letter matrix searched by every task.
///
/// Cells are stored row-major in a single buffer. The grid is never mutated
/// after construction, so it is shared between search threads by plain
/// reference without any locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<char>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Builds a grid from its rows, rejecting empty grids and ragged rows
    pub fn new<I, S>(rows: I) -> SearchResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cells = Vec::new();
        let mut row_count = 0;
        let mut cols = 0;

        for (index, row) in rows.into_iter().enumerate() {
            let before = cells.len();
            cells.extend(row.as_ref().chars());
            let width = cells.len() - before;

            if index == 0 {
                cols = width;
            } else if width != cols {
                return Err(SearchError::invalid_grid(format!(
                    "row {} has {} columns, expected {}",
                    index + 1,
                    width,
                    cols
                )));
            }
            row_count += 1;
        }

        if row_count == 0 || cols == 0 {
            return Err(SearchError::invalid_grid("grid must have at least one row and one column"));
        }

        Ok(Self {
            cells,
            rows: row_count,
            cols,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the cell at (`row`, `col`), or `None` when outside the grid.
    /// Coordinates are signed so callers can walk off any edge.
    pub fn get(&self, row: isize, col: isize) -> Option<char> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.cells[row * self.cols + col])
    }

    /// Case-insensitive comparison of the cell at (`row`, `col`) with `letter`
    pub fn letter_matches(&self, row: isize, col: isize, letter: char) -> bool {
        self.get(row, col)
            .is_some_and(|cell| letters_eq_ignore_case(cell, letter))
    }

    /// The characters of one row, in column order
    pub fn row(&self, row: usize) -> &[char] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// Iterates over all rows
    pub fn iter_rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.cols)
    }
}

fn letters_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}
