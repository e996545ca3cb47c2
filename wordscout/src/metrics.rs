use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

use crate::results::SearchOutcome;

/// Tracks task and scan counters across all search threads
#[derive(Debug, Clone)]
pub struct SearchMetrics {
    // Task lifecycle
    tasks_launched: Arc<AtomicU64>,
    tasks_completed: Arc<AtomicU64>,

    // Outcomes
    words_found: Arc<AtomicU64>,
    words_not_found: Arc<AtomicU64>,

    // Work done by the scans
    positions_examined: Arc<AtomicU64>,
}

impl SearchMetrics {
    /// Creates a new SearchMetrics instance
    pub fn new() -> Self {
        Self {
            tasks_launched: Arc::new(AtomicU64::new(0)),
            tasks_completed: Arc::new(AtomicU64::new(0)),
            words_found: Arc::new(AtomicU64::new(0)),
            words_not_found: Arc::new(AtomicU64::new(0)),
            positions_examined: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Records a task being handed to a thread
    pub fn record_launch(&self) {
        let launched = self.tasks_launched.fetch_add(1, Ordering::Relaxed) + 1;
        debug!("Tasks launched: {}", launched);
    }

    /// Records a finished task and how many (cell, direction) pairs it tried
    pub fn record_completion(&self, outcome: &SearchOutcome, positions: u64) {
        self.tasks_completed.fetch_add(1, Ordering::Relaxed);
        self.positions_examined
            .fetch_add(positions, Ordering::Relaxed);
        if outcome.is_found() {
            self.words_found.fetch_add(1, Ordering::Relaxed);
        } else {
            self.words_not_found.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Gets current statistics
    pub fn get_stats(&self) -> SearchStats {
        SearchStats {
            tasks_launched: self.tasks_launched.load(Ordering::Relaxed),
            tasks_completed: self.tasks_completed.load(Ordering::Relaxed),
            words_found: self.words_found.load(Ordering::Relaxed),
            words_not_found: self.words_not_found.load(Ordering::Relaxed),
            positions_examined: self.positions_examined.load(Ordering::Relaxed),
        }
    }

    /// Logs current statistics
    pub fn log_stats(&self) {
        let stats = self.get_stats();
        info!(
            "Search stats:\n\
             Tasks launched/completed: {}/{}\n\
             Words found/not found: {}/{}\n\
             Positions examined: {}",
            stats.tasks_launched,
            stats.tasks_completed,
            stats.words_found,
            stats.words_not_found,
            stats.positions_examined
        );
    }
}

impl Default for SearchMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of the search counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    pub tasks_launched: u64,
    pub tasks_completed: u64,
    pub words_found: u64,
    pub words_not_found: u64,
    pub positions_examined: u64,
}
