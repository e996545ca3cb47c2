use config::{Config as ConfigBuilder, File};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use crate::errors::SearchResult;

/// How search tasks are mapped onto threads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionMode {
    /// One OS thread per target word, all joined before returning
    #[default]
    ThreadPerWord,
    /// Tasks share a fixed-size worker pool of `thread_count` threads
    Pooled,
}

/// Order of outcomes in the finished result set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultOrder {
    /// The order in which tasks finished
    #[default]
    Completion,
    /// The order of the input word list
    Input,
}

/// Configuration for a search run.
///
/// # Configuration Locations
///
/// Loaded from these locations, later ones overriding earlier ones:
/// 1. Global `$HOME/.config/wordscout/config.yaml`
/// 2. Local `.wordscout.yaml` in the current directory
/// 3. Custom config file given with `--config`
///
/// # Configuration Format
///
/// ```yaml
/// # thread_per_word | pooled
/// execution: thread_per_word
///
/// # Worker count for pooled execution (default: CPU cores)
/// thread_count: 4
///
/// # completion | input
/// result_order: completion
///
/// # Print per-task progress lines
/// progress: true
///
/// # Log level (trace, debug, info, warn, error)
/// log_level: "info"
/// ```
///
/// Command-line arguments take precedence; see [`SearchConfig::merge_with_cli`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub execution: ExecutionMode,

    /// Number of worker threads in pooled mode.
    /// Ignored when every word gets its own thread.
    #[serde(default = "default_thread_count")]
    pub thread_count: NonZeroUsize,

    #[serde(default)]
    pub result_order: ResultOrder,

    /// Whether per-task progress lines are printed
    #[serde(default = "default_progress")]
    pub progress: bool,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_thread_count() -> NonZeroUsize {
    NonZeroUsize::new(num_cpus::get()).unwrap_or(NonZeroUsize::MIN)
}

fn default_progress() -> bool {
    true
}

pub(crate) fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            execution: ExecutionMode::default(),
            thread_count: default_thread_count(),
            result_order: ResultOrder::default(),
            progress: default_progress(),
            log_level: default_log_level(),
        }
    }
}

impl SearchConfig {
    /// Loads configuration from the default locations
    pub fn load() -> SearchResult<Self> {
        Self::load_from(None)
    }

    /// Loads configuration, layering a specific file over the defaults.
    /// A custom path that does not exist is an error; default locations are optional.
    pub fn load_from(config_path: Option<&Path>) -> SearchResult<Self> {
        let mut builder = ConfigBuilder::builder();

        let default_files = [
            dirs::config_dir().map(|p| p.join("wordscout/config.yaml")),
            Some(PathBuf::from(".wordscout.yaml")),
        ];

        for path in default_files.iter().flatten() {
            if path.exists() {
                builder = builder.add_source(File::from(path.as_path()));
            }
        }

        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path).required(true));
        }

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Merges CLI arguments with configuration file values
    pub fn merge_with_cli(mut self, cli: CliOverrides) -> Self {
        if let Some(execution) = cli.execution {
            self.execution = execution;
        }
        if let Some(thread_count) = cli.thread_count {
            self.thread_count = thread_count;
        }
        if let Some(order) = cli.result_order {
            self.result_order = order;
        }
        if cli.quiet {
            self.progress = false;
        }
        if let Some(level) = cli.log_level {
            self.log_level = level;
        }
        self
    }
}

/// Values given on the command line; `None` keeps the file value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub execution: Option<ExecutionMode>,
    pub thread_count: Option<NonZeroUsize>,
    pub result_order: Option<ResultOrder>,
    pub quiet: bool,
    pub log_level: Option<String>,
}
