pub mod config;
pub mod errors;
pub mod grid;
pub mod logging;
pub mod metrics;
pub mod progress;
pub mod puzzle;
pub mod report;
pub mod results;
pub mod search;

pub use config::{ExecutionMode, ResultOrder, SearchConfig};
pub use errors::{SearchError, SearchResult};
pub use grid::Grid;
pub use puzzle::Puzzle;
pub use results::{ResultSet, ResultSink, SearchOutcome};
pub use search::{search, Direction, SearchCoordinator};
