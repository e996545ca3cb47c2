use std::io::Write;
use std::sync::{Mutex, PoisonError};
use tracing::{debug, info};

use crate::results::SearchOutcome;

/// Observer notified as each search task starts and finishes.
///
/// Called concurrently from every task thread, so implementations must do
/// their own synchronization. Notifications never influence the search.
pub trait ProgressReporter: Send + Sync {
    fn task_started(&self, task_id: usize, word: &str);
    fn task_finished(&self, task_id: usize, outcome: &SearchOutcome);
}

/// Discards every notification
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn task_started(&self, _task_id: usize, _word: &str) {}
    fn task_finished(&self, _task_id: usize, _outcome: &SearchOutcome) {}
}

/// Emits notifications as `tracing` events
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingProgress;

impl ProgressReporter for TracingProgress {
    fn task_started(&self, task_id: usize, word: &str) {
        debug!(task_id, word, "Task started");
    }

    fn task_finished(&self, task_id: usize, outcome: &SearchOutcome) {
        match outcome {
            SearchOutcome::Found {
                word,
                row,
                col,
                direction,
            } => info!(task_id, word = %word, row, col, %direction, "Word found"),
            SearchOutcome::NotFound { word } => info!(task_id, word = %word, "Word not found"),
        }
    }
}

/// Writes one line per notification to a shared writer (usually stdout).
///
/// The writer sits behind its own mutex so lines from different tasks never
/// interleave. This lock is independent of the result sink's lock.
#[derive(Debug)]
pub struct ConsoleProgress<W: Write + Send> {
    out: Mutex<W>,
}

impl<W: Write + Send> ConsoleProgress<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn emit(&self, line: std::fmt::Arguments<'_>) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        // Progress output is best effort; a closed pipe must not abort the search.
        let _ = writeln!(out, "{}", line);
        let _ = out.flush();
    }
}

impl<W: Write + Send> ProgressReporter for ConsoleProgress<W> {
    fn task_started(&self, task_id: usize, word: &str) {
        self.emit(format_args!("[task {}] searching for '{}'", task_id, word));
    }

    fn task_finished(&self, task_id: usize, outcome: &SearchOutcome) {
        match outcome {
            SearchOutcome::Found {
                word,
                row,
                col,
                direction,
            } => self.emit(format_args!(
                "[task {}] found '{}' at ({},{}) {}",
                task_id, word, row, col, direction
            )),
            SearchOutcome::NotFound { word } => {
                self.emit(format_args!("[task {}] not found: '{}'", task_id, word))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::matcher::Direction;
    use std::thread;

    #[test]
    fn test_console_lines() {
        let progress = ConsoleProgress::new(Vec::new());
        progress.task_started(1, "cat");
        progress.task_finished(
            1,
            &SearchOutcome::Found {
                word: "cat".to_string(),
                row: 2,
                col: 3,
                direction: Direction::UpLeft,
            },
        );
        progress.task_finished(
            2,
            &SearchOutcome::NotFound {
                word: "dog".to_string(),
            },
        );

        let output = String::from_utf8(progress.into_inner()).unwrap();
        assert_eq!(
            output,
            "[task 1] searching for 'cat'\n\
             [task 1] found 'cat' at (2,3) up-left\n\
             [task 2] not found: 'dog'\n"
        );
    }

    #[test]
    fn test_console_lines_do_not_interleave() {
        let progress = ConsoleProgress::new(Vec::new());
        thread::scope(|s| {
            for id in 1..=32 {
                let progress = &progress;
                s.spawn(move || progress.task_started(id, "abcdefghijklmnopqrstuvwxyz"));
            }
        });

        let output = String::from_utf8(progress.into_inner()).unwrap();
        assert_eq!(output.lines().count(), 32);
        assert!(output
            .lines()
            .all(|l| l.starts_with("[task ") && l.ends_with("searching for 'abcdefghijklmnopqrstuvwxyz'")));
    }
}
