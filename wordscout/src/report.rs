use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

use crate::errors::{SearchError, SearchResult};
use crate::grid::Grid;
use crate::results::{ResultSet, SearchOutcome};

/// Returns the grid rows with the letters of every found word uppercased.
///
/// Each path is retraced from the reported start along the reported
/// direction, so the highlighted cells are exactly the ones that matched.
pub fn highlight(grid: &Grid, results: &ResultSet) -> Vec<String> {
    let mut cells: Vec<Vec<char>> = grid.iter_rows().map(<[char]>::to_vec).collect();

    for outcome in results.outcomes() {
        let SearchOutcome::Found {
            word,
            row,
            col,
            direction,
        } = outcome
        else {
            continue;
        };

        let start = (*row as isize - 1, *col as isize - 1);
        for (r, c) in direction.path(start.0, start.1, word.chars().count()) {
            if grid.get(r, c).is_some() {
                let cell = &mut cells[r as usize][c as usize];
                *cell = to_single_uppercase(*cell);
            }
        }
    }

    cells
        .into_iter()
        .map(|row| row.into_iter().collect())
        .collect()
}

fn to_single_uppercase(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Formats one outcome as a report line
pub fn report_line(outcome: &SearchOutcome) -> String {
    match outcome {
        SearchOutcome::Found {
            word,
            row,
            col,
            direction,
        } => format!("{} ({},{}): {}", word, row, col, direction),
        SearchOutcome::NotFound { word } => format!("{}: not found", word),
    }
}

/// Renders the highlighted grid, a blank line, then one line per outcome
pub fn render(grid: &Grid, results: &ResultSet) -> String {
    let mut out = String::new();
    for row in highlight(grid, results) {
        out.push_str(&row);
        out.push('\n');
    }
    out.push('\n');
    for outcome in results.outcomes() {
        out.push_str(&report_line(outcome));
        out.push('\n');
    }
    out
}

/// Writes the rendered report to `path`
pub fn write_report(path: &Path, grid: &Grid, results: &ResultSet) -> SearchResult<()> {
    fs::write(path, render(grid, results)).map_err(|e| SearchError::from_io(path, e))?;
    debug!("Wrote report for {} words to {}", results.len(), path.display());
    Ok(())
}

/// Totals shown at the end of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub found: usize,
    pub not_found: usize,
    pub total: usize,
    pub elapsed: Duration,
}

impl Summary {
    pub fn from_results(results: &ResultSet, elapsed: Duration) -> Self {
        Self {
            found: results.found_count(),
            not_found: results.not_found_count(),
            total: results.len(),
            elapsed,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total found: {}/{}", self.found, self.total)?;
        writeln!(f, "Total not found: {}/{}", self.not_found, self.total)?;
        write!(
            f,
            "Processing time: {}",
            humantime::format_duration(self.elapsed)
        )
    }
}
