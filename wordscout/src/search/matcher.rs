use serde::{Deserialize, Serialize};
use std::fmt;

use crate::grid::Grid;

/// One of the eight straight lines a word can follow through the grid.
///
/// The declaration order is the scan order used by every task, so it also
/// decides which match wins when a word appears more than once at the same
/// starting cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    Right,
    Left,
    Down,
    Up,
    DownRight,
    UpLeft,
    DownLeft,
    UpRight,
}

impl Direction {
    /// All directions in scan order
    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
        Direction::DownRight,
        Direction::UpLeft,
        Direction::DownLeft,
        Direction::UpRight,
    ];

    /// Unit step as `(row delta, column delta)`
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Left => (0, -1),
            Direction::Down => (1, 0),
            Direction::Up => (-1, 0),
            Direction::DownRight => (1, 1),
            Direction::UpLeft => (-1, -1),
            Direction::DownLeft => (1, -1),
            Direction::UpRight => (-1, 1),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Direction::Right => "right",
            Direction::Left => "left",
            Direction::Down => "down",
            Direction::Up => "up",
            Direction::DownRight => "down-right",
            Direction::UpLeft => "up-left",
            Direction::DownLeft => "down-left",
            Direction::UpRight => "up-right",
        }
    }

    /// Grid coordinates of the `len` cells starting at (`row`, `col`)
    pub fn path(self, row: isize, col: isize, len: usize) -> impl Iterator<Item = (isize, isize)> {
        let (dr, dc) = self.delta();
        (0..len as isize).map(move |step| (row + dr * step, col + dc * step))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Tests whether `word` is spelled from (`row`, `col`) along `direction`.
///
/// The start may lie anywhere, including outside the grid. The walk stops at
/// the first cell that is out of bounds or holds a different letter.
pub fn matches(grid: &Grid, word: &str, row: isize, col: isize, direction: Direction) -> bool {
    let len = word.chars().count();
    if len == 0 {
        return false;
    }
    direction
        .path(row, col, len)
        .zip(word.chars())
        .all(|((r, c), letter)| grid.letter_matches(r, c, letter))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::new(["CAT", "ODX", "WEG"]).unwrap()
    }

    #[test]
    fn test_axis_directions() {
        let grid = grid();
        assert!(matches(&grid, "CAT", 0, 0, Direction::Right));
        assert!(matches(&grid, "TAC", 0, 2, Direction::Left));
        assert!(matches(&grid, "COW", 0, 0, Direction::Down));
        assert!(matches(&grid, "WOC", 2, 0, Direction::Up));
    }

    #[test]
    fn test_diagonal_directions() {
        let grid = grid();
        assert!(matches(&grid, "CDG", 0, 0, Direction::DownRight));
        assert!(matches(&grid, "GDC", 2, 2, Direction::UpLeft));
        assert!(matches(&grid, "TDW", 0, 2, Direction::DownLeft));
        assert!(matches(&grid, "WDT", 2, 0, Direction::UpRight));
    }

    #[test]
    fn test_walking_off_the_grid() {
        let grid = grid();
        assert!(!matches(&grid, "CATS", 0, 0, Direction::Right));
        assert!(!matches(&grid, "AC", 0, 1, Direction::UpLeft));
        assert!(!matches(&grid, "CAT", -1, 0, Direction::Right));
        assert!(!matches(&grid, "CAT", 0, 5, Direction::Left));
    }

    #[test]
    fn test_case_insensitive() {
        let grid = grid();
        assert!(matches(&grid, "cat", 0, 0, Direction::Right));
        let lower = Grid::new(["dog"]).unwrap();
        assert!(matches(&lower, "DOG", 0, 0, Direction::Right));
    }

    #[test]
    fn test_empty_word_never_matches() {
        assert!(!matches(&grid(), "", 0, 0, Direction::Right));
    }

    #[test]
    fn test_scan_order_and_labels() {
        let deltas: Vec<_> = Direction::ALL.iter().map(|d| d.delta()).collect();
        assert_eq!(
            deltas,
            vec![(0, 1), (0, -1), (1, 0), (-1, 0), (1, 1), (-1, -1), (1, -1), (-1, 1)]
        );
        assert_eq!(Direction::DownLeft.to_string(), "down-left");
        let path: Vec<_> = Direction::UpRight.path(2, 0, 3).collect();
        assert_eq!(path, vec![(2, 0), (1, 1), (0, 2)]);
    }
}
