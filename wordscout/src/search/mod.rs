/// Concurrent word search.
///
/// Each target word becomes one [`SearchTask`]. The [`SearchCoordinator`]
/// starts a thread per task (or hands the tasks to a worker pool), every
/// task scans the shared read-only [`Grid`](crate::grid::Grid) on its own
/// and reports a single outcome into a shared
/// [`ResultSink`](crate::results::ResultSink), and the coordinator returns
/// only after all of them have been joined.
///
/// ```rust,ignore
/// let grid = Grid::new(["CAT", "ODX", "WEG"])?;
/// let results = search(&grid, &["cat", "cow", "zebra"])?;
/// assert_eq!(results.found_count(), 2);
/// ```
pub mod engine;
pub mod matcher;
pub mod task;

pub use engine::{search, SearchCoordinator};
pub use matcher::{matches, Direction};
pub use task::{find_word, SearchTask};
