use std::io;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::thread;
use std::time::Instant;
use tracing::{debug, info};

use super::task::SearchTask;
use crate::config::{ExecutionMode, ResultOrder, SearchConfig};
use crate::errors::{SearchError, SearchResult};
use crate::grid::Grid;
use crate::metrics::SearchMetrics;
use crate::progress::{NoProgress, ProgressReporter};
use crate::results::{ResultSet, ResultSink};

/// Launches one search task per word and collects their outcomes.
///
/// The grid is borrowed by every task and never copied. The result sink
/// and the metrics live only for the duration of one
/// [`search`](SearchCoordinator::search) call; once every task has been
/// joined the sink is turned into the returned [`ResultSet`].
#[derive(Clone)]
pub struct SearchCoordinator {
    execution: ExecutionMode,
    thread_count: NonZeroUsize,
    result_order: ResultOrder,
    progress: Arc<dyn ProgressReporter>,
    #[cfg(test)]
    fail_launch_at: Option<usize>,
}

impl SearchCoordinator {
    /// Thread-per-word execution, completion order, no progress output
    pub fn new() -> Self {
        Self::from_config(&SearchConfig::default())
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        Self {
            execution: config.execution,
            thread_count: config.thread_count,
            result_order: config.result_order,
            progress: Arc::new(NoProgress),
            #[cfg(test)]
            fail_launch_at: None,
        }
    }

    pub fn with_progress(mut self, progress: Arc<dyn ProgressReporter>) -> Self {
        self.progress = progress;
        self
    }

    pub fn with_execution(mut self, execution: ExecutionMode) -> Self {
        self.execution = execution;
        self
    }

    pub fn with_thread_count(mut self, thread_count: NonZeroUsize) -> Self {
        self.thread_count = thread_count;
        self
    }

    pub fn with_result_order(mut self, result_order: ResultOrder) -> Self {
        self.result_order = result_order;
        self
    }

    /// Makes the thread for `task_id` fail to start
    #[cfg(test)]
    fn with_failed_launch(mut self, task_id: usize) -> Self {
        self.fail_launch_at = Some(task_id);
        self
    }

    /// Searches the grid for every word concurrently.
    ///
    /// Returns exactly one outcome per entry of `words`, duplicates included.
    /// Fails only when a worker thread cannot be started; tasks already
    /// running are still joined before the error is returned.
    pub fn search<S: AsRef<str>>(&self, grid: &Grid, words: &[S]) -> SearchResult<ResultSet> {
        self.search_with_metrics(grid, words, &SearchMetrics::new())
    }

    /// Same as [`search`](SearchCoordinator::search), recording this run's
    /// counters into `metrics`
    pub fn search_with_metrics<S: AsRef<str>>(
        &self,
        grid: &Grid,
        words: &[S],
        metrics: &SearchMetrics,
    ) -> SearchResult<ResultSet> {
        info!(
            "Starting search for {} words in a {}x{} grid",
            words.len(),
            grid.rows(),
            grid.cols()
        );

        if words.is_empty() {
            debug!("No words to search for, returning empty result");
            return Ok(ResultSet::new());
        }

        let tasks: Vec<SearchTask> = words
            .iter()
            .enumerate()
            .map(|(i, word)| SearchTask::new(i + 1, word.as_ref()))
            .collect();

        let started = Instant::now();
        let sink = ResultSink::with_capacity(tasks.len());

        match self.execution {
            ExecutionMode::ThreadPerWord => {
                self.run_thread_per_word(grid, tasks, &sink, metrics)?
            }
            ExecutionMode::Pooled => self.run_pooled(grid, tasks, &sink, metrics)?,
        }

        let mut results = sink.snapshot();
        if self.result_order == ResultOrder::Input {
            results = results.into_input_order();
        }

        metrics.log_stats();
        info!(
            "Search complete in {:?}. Found {} of {} words",
            started.elapsed(),
            results.found_count(),
            results.len()
        );

        Ok(results)
    }

    fn run_thread_per_word(
        &self,
        grid: &Grid,
        tasks: Vec<SearchTask>,
        sink: &ResultSink,
        metrics: &SearchMetrics,
    ) -> SearchResult<()> {
        let progress = self.progress.as_ref();

        debug!("Spawning {} search threads", tasks.len());

        // Leaving the scope joins every thread that was spawned, including
        // when a later spawn fails and the error is returned early.
        thread::scope(|scope| {
            for task in tasks {
                let task_id = task.id;
                self.spawn_task_thread(scope, task_id, move || {
                    task.execute(grid, sink, progress, metrics)
                })
                .map_err(|e| SearchError::thread_spawn(task_id, e))?;
                metrics.record_launch();
            }
            Ok(())
        })
    }

    fn spawn_task_thread<'scope, 'env, F>(
        &self,
        scope: &'scope thread::Scope<'scope, 'env>,
        task_id: usize,
        job: F,
    ) -> io::Result<()>
    where
        F: FnOnce() + Send + 'scope,
    {
        #[cfg(test)]
        if self.fail_launch_at == Some(task_id) {
            return Err(io::Error::new(
                io::ErrorKind::WouldBlock,
                "thread limit reached",
            ));
        }

        thread::Builder::new()
            .name(format!("wordscout-task-{}", task_id))
            .spawn_scoped(scope, job)?;
        Ok(())
    }

    fn run_pooled(
        &self,
        grid: &Grid,
        tasks: Vec<SearchTask>,
        sink: &ResultSink,
        metrics: &SearchMetrics,
    ) -> SearchResult<()> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.thread_count.get())
            .thread_name(|i| format!("wordscout-worker-{}", i))
            .build()
            .map_err(|e| SearchError::thread_pool(e.to_string()))?;

        let progress = self.progress.as_ref();

        debug!(
            "Running {} search tasks on {} pooled threads",
            tasks.len(),
            self.thread_count
        );

        pool.scope(|scope| {
            for task in tasks {
                scope.spawn(move |_| task.execute(grid, sink, progress, metrics));
                metrics.record_launch();
            }
        });

        Ok(())
    }
}

impl Default for SearchCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SearchCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchCoordinator")
            .field("execution", &self.execution)
            .field("thread_count", &self.thread_count)
            .field("result_order", &self.result_order)
            .finish_non_exhaustive()
    }
}

/// Searches `grid` for `words` with one thread per word
pub fn search<S: AsRef<str>>(grid: &Grid, words: &[S]) -> SearchResult<ResultSet> {
    SearchCoordinator::new().search(grid, words)
}
