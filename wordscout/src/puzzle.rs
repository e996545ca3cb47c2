use std::fs;
use std::path::Path;
use tracing::debug;

use crate::errors::{SearchError, SearchResult};
use crate::grid::Grid;

/// A grid and the words to look for in it, as read from a puzzle file.
///
/// The text format is a `<rows> <cols>` header line, then exactly `rows`
/// grid lines of `cols` letters, then one target word per line:
///
/// ```text
/// 3 4
/// abce
/// sfcs
/// adee
/// see
/// abcced
/// ```
///
/// Grid lines are taken as written apart from a trailing `\r`. Word lines
/// are trimmed of surrounding whitespace and blank ones are skipped. Words
/// keep their file order and duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub grid: Grid,
    pub words: Vec<String>,
}

impl Puzzle {
    /// Reads and parses a puzzle file
    pub fn from_file(path: &Path) -> SearchResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| SearchError::from_io(path, e))?;
        let puzzle = Self::parse(&content)?;
        debug!(
            "Loaded {}x{} puzzle with {} words from {}",
            puzzle.grid.rows(),
            puzzle.grid.cols(),
            puzzle.words.len(),
            path.display()
        );
        Ok(puzzle)
    }

    /// Parses puzzle text
    pub fn parse(input: &str) -> SearchResult<Self> {
        let mut lines = input.lines();

        let header = lines
            .next()
            .ok_or_else(|| SearchError::invalid_puzzle(1, "missing '<rows> <cols>' header"))?;
        let (rows, cols) = parse_header(header)?;

        let mut grid_rows = Vec::with_capacity(rows);
        for index in 0..rows {
            let line = lines.next().ok_or_else(|| {
                SearchError::invalid_puzzle(
                    index + 2,
                    format!("expected {} grid rows, found {}", rows, index),
                )
            })?;
            let row = line.trim_end_matches('\r');
            let width = row.chars().count();
            if width != cols {
                return Err(SearchError::invalid_grid(format!(
                    "row {} has {} columns, expected {}",
                    index + 1,
                    width,
                    cols
                )));
            }
            grid_rows.push(row);
        }

        let grid = Grid::new(grid_rows)?;
        let words = lines
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self { grid, words })
    }
}

fn parse_header(line: &str) -> SearchResult<(usize, usize)> {
    let mut parts = line.split_whitespace();
    let mut dimension = |name: &str| -> SearchResult<usize> {
        let raw = parts
            .next()
            .ok_or_else(|| SearchError::invalid_puzzle(1, format!("missing {} count", name)))?;
        match raw.parse::<usize>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(SearchError::invalid_puzzle(
                1,
                format!("{} count must be a positive integer, got '{}'", name, raw),
            )),
        }
    };

    let rows = dimension("row")?;
    let cols = dimension("column")?;
    if parts.next().is_some() {
        return Err(SearchError::invalid_puzzle(1, "unexpected data after column count"));
    }
    Ok((rows, cols))
}
