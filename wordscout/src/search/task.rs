use tracing::{debug, trace};

use super::matcher::{self, Direction};
use crate::grid::Grid;
use crate::metrics::SearchMetrics;
use crate::progress::ProgressReporter;
use crate::results::{ResultSink, SearchOutcome};

/// One unit of concurrent work: a target word and the id used to report on it.
///
/// Ids start at 1 and follow the input word list. They only label progress
/// output and allow callers to restore input order afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTask {
    pub id: usize,
    pub word: String,
}

impl SearchTask {
    pub fn new(id: usize, word: impl Into<String>) -> Self {
        Self {
            id,
            word: word.into(),
        }
    }

    /// Scans the grid for this task's word
    pub fn run(&self, grid: &Grid) -> SearchOutcome {
        scan(grid, &self.word).0
    }

    /// Runs the scan and delivers the single outcome to the sink
    pub(crate) fn execute(
        self,
        grid: &Grid,
        sink: &ResultSink,
        progress: &dyn ProgressReporter,
        metrics: &SearchMetrics,
    ) {
        progress.task_started(self.id, &self.word);
        debug!("Task {} searching for '{}'", self.id, self.word);

        let (outcome, positions) = scan(grid, &self.word);

        metrics.record_completion(&outcome, positions);
        progress.task_finished(self.id, &outcome);
        sink.report(self.id, outcome);
    }
}

/// Finds the first occurrence of `word` in the grid.
///
/// Cells are visited in row-major order and, for each cell, directions in
/// [`Direction::ALL`] order. The first hit wins, so the result depends only
/// on the grid and the word.
pub fn find_word(grid: &Grid, word: &str) -> SearchOutcome {
    scan(grid, word).0
}

/// Returns the outcome and the number of (cell, direction) pairs tried
fn scan(grid: &Grid, word: &str) -> (SearchOutcome, u64) {
    let mut positions = 0u64;

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            for direction in Direction::ALL {
                positions += 1;
                if matcher::matches(grid, word, row as isize, col as isize, direction) {
                    trace!(
                        "'{}' matched at ({},{}) {} after {} positions",
                        word,
                        row + 1,
                        col + 1,
                        direction,
                        positions
                    );
                    let outcome = SearchOutcome::Found {
                        word: word.to_string(),
                        row: row + 1,
                        col: col + 1,
                        direction,
                    };
                    return (outcome, positions);
                }
            }
        }
    }

    trace!("'{}' not found after {} positions", word, positions);
    (
        SearchOutcome::NotFound {
            word: word.to_string(),
        },
        positions,
    )
}
