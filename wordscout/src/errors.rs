/// Error types for wordscout.
///
/// Only one error can happen inside the search itself: the operating system
/// refusing to start a worker thread. Everything else in this enum belongs to
/// the edges of the crate (reading a puzzle, writing a report, loading
/// configuration). A word that is absent from the grid is never an error; it
/// is reported as [`SearchOutcome::NotFound`](crate::results::SearchOutcome).
///
/// ```rust,ignore
/// match coordinator.search(&grid, &words) {
///     Ok(results) => // render the report,
///     Err(SearchError::ThreadSpawn { task_id, .. }) => // abort the run,
///     Err(e) => // other failures
/// }
/// ```
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for search operations
pub type SearchResult<T> = Result<T, SearchError>;

/// Errors that can occur while loading, searching or reporting a puzzle
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Failed to spawn search thread for task {task_id}: {source}")]
    ThreadSpawn {
        task_id: usize,
        source: std::io::Error,
    },
    #[error("Failed to build search thread pool: {0}")]
    ThreadPool(String),
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),
    #[error("Invalid puzzle at line {line}: {message}")]
    InvalidPuzzle { line: usize, message: String },
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl SearchError {
    pub fn thread_spawn(task_id: usize, source: std::io::Error) -> Self {
        Self::ThreadSpawn { task_id, source }
    }

    pub fn thread_pool(msg: impl Into<String>) -> Self {
        Self::ThreadPool(msg.into())
    }

    pub fn invalid_grid(msg: impl Into<String>) -> Self {
        Self::InvalidGrid(msg.into())
    }

    pub fn invalid_puzzle(line: usize, message: impl Into<String>) -> Self {
        Self::InvalidPuzzle {
            line,
            message: message.into(),
        }
    }

    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound(path.into())
    }

    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        Self::PermissionDenied(path.into())
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Maps an IO error on `path` to the most specific variant
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::file_not_found(path),
            std::io::ErrorKind::PermissionDenied => Self::permission_denied(path),
            _ => Self::IoError(err),
        }
    }
}

impl From<config::ConfigError> for SearchError {
    fn from(err: config::ConfigError) -> Self {
        Self::ConfigError(err.to_string())
    }
}
