/// Search outcome types and the shared sink tasks report into.
///
/// Every task deposits exactly one [`SearchOutcome`] into a [`ResultSink`].
/// The sink is the only mutable state shared between search threads; each
/// report takes the lock once, appends, and releases it. Once the
/// coordinator has joined every task it consumes the sink and hands the
/// caller an owned, read-only [`ResultSet`].
use std::sync::{Mutex, PoisonError};

use crate::search::matcher::Direction;

/// Final result of searching one word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The word was found; `row` and `col` are 1-based
    Found {
        word: String,
        row: usize,
        col: usize,
        direction: Direction,
    },
    NotFound { word: String },
}

impl SearchOutcome {
    pub fn word(&self) -> &str {
        match self {
            SearchOutcome::Found { word, .. } | SearchOutcome::NotFound { word } => word,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found { .. })
    }
}

/// One outcome together with the identifier of the task that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskReport {
    pub task_id: usize,
    pub outcome: SearchOutcome,
}

/// Concurrency-safe collector of task outcomes
#[derive(Debug, Default)]
pub struct ResultSink {
    reports: Mutex<Vec<TaskReport>>,
}

impl ResultSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            reports: Mutex::new(Vec::with_capacity(capacity)),
        }
    }

    /// Appends one outcome. Safe to call from any number of threads.
    pub fn report(&self, task_id: usize, outcome: SearchOutcome) {
        // A panic elsewhere cannot leave a half-pushed entry behind, so a
        // poisoned vector is still consistent.
        let mut reports = self.reports.lock().unwrap_or_else(PoisonError::into_inner);
        reports.push(TaskReport { task_id, outcome });
    }

    /// Consumes the sink once all tasks have reported
    pub fn snapshot(self) -> ResultSet {
        let reports = self
            .reports
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        ResultSet { reports }
    }
}

/// Outcomes of one search, in the order tasks completed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    reports: Vec<TaskReport>,
}

impl ResultSet {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Iterates over the outcomes in their current order
    pub fn outcomes(&self) -> impl Iterator<Item = &SearchOutcome> {
        self.reports.iter().map(|r| &r.outcome)
    }

    pub fn reports(&self) -> &[TaskReport] {
        &self.reports
    }

    pub fn found_count(&self) -> usize {
        self.outcomes().filter(|o| o.is_found()).count()
    }

    pub fn not_found_count(&self) -> usize {
        self.len() - self.found_count()
    }

    /// Reorders the set to match the input word list instead of completion order
    pub fn into_input_order(mut self) -> Self {
        self.reports.sort_by_key(|r| r.task_id);
        self
    }
}

impl IntoIterator for ResultSet {
    type Item = SearchOutcome;
    type IntoIter = std::iter::Map<std::vec::IntoIter<TaskReport>, fn(TaskReport) -> SearchOutcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.reports
            .into_iter()
            .map((|r: TaskReport| r.outcome) as fn(TaskReport) -> SearchOutcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn found(word: &str) -> SearchOutcome {
        SearchOutcome::Found {
            word: word.to_string(),
            row: 1,
            col: 1,
            direction: Direction::Right,
        }
    }

    fn not_found(word: &str) -> SearchOutcome {
        SearchOutcome::NotFound {
            word: word.to_string(),
        }
    }

    #[test]
    fn test_outcome_accessors() {
        assert_eq!(found("cat").word(), "cat");
        assert!(found("cat").is_found());
        assert_eq!(not_found("dog").word(), "dog");
        assert!(!not_found("dog").is_found());
    }

    #[test]
    fn test_sink_keeps_report_order() {
        let sink = ResultSink::new();
        sink.report(2, not_found("dog"));
        sink.report(1, found("cat"));

        let results = sink.snapshot();
        assert_eq!(results.len(), 2);
        assert_eq!(results.found_count(), 1);
        assert_eq!(results.not_found_count(), 1);
        let words: Vec<_> = results.outcomes().map(|o| o.word()).collect();
        assert_eq!(words, vec!["dog", "cat"]);

        let ordered = results.into_input_order();
        let words: Vec<_> = ordered.outcomes().map(|o| o.word()).collect();
        assert_eq!(words, vec!["cat", "dog"]);
    }

    #[test]
    fn test_concurrent_reports_are_not_lost() {
        let sink = ResultSink::with_capacity(64);
        thread::scope(|s| {
            for id in 1..=64 {
                let sink = &sink;
                s.spawn(move || sink.report(id, not_found(&format!("w{}", id))));
            }
        });

        let results = sink.snapshot();
        assert_eq!(results.len(), 64);
        let mut ids: Vec<_> = results.reports().iter().map(|r| r.task_id).collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=64).collect::<Vec<_>>());
    }

    #[test]
    fn test_empty_set() {
        let results = ResultSink::new().snapshot();
        assert!(results.is_empty());
        assert_eq!(results.into_iter().count(), 0);
    }
}
