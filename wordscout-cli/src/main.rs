use clap::Parser;
use colored::Colorize;
use std::{
    io,
    num::NonZeroUsize,
    path::{Path, PathBuf},
    process::ExitCode,
    sync::Arc,
    time::Instant,
};
use tracing::debug;
use wordscout::{
    config::CliOverrides,
    logging,
    progress::{ConsoleProgress, NoProgress, ProgressReporter},
    report::{self, Summary},
    ExecutionMode, Puzzle, ResultOrder, ResultSet, SearchConfig, SearchCoordinator, SearchError,
    SearchOutcome,
};

type Result<T> = std::result::Result<T, SearchError>;

/// Solve a word-search puzzle, one search thread per word
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Puzzle file: "<rows> <cols>" header, grid rows, then one word per line
    input: PathBuf,

    /// File to write the highlighted grid and per-word results to
    output: PathBuf,

    /// Configuration file (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Run tasks on a fixed worker pool instead of one thread per word
    #[arg(long)]
    pooled: bool,

    /// Number of pooled worker threads
    #[arg(short = 'j', long)]
    threads: Option<NonZeroUsize>,

    /// Report results in word-list order instead of completion order
    #[arg(long)]
    ordered: bool,

    /// Suppress per-task progress lines
    #[arg(short, long)]
    quiet: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            execution: self.pooled.then_some(ExecutionMode::Pooled),
            thread_count: self.threads,
            result_order: self.ordered.then_some(ResultOrder::Input),
            quiet: self.quiet,
            log_level: self.log_level.clone(),
        }
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = SearchConfig::load_from(cli.config.as_deref())?.merge_with_cli(cli.overrides());
    logging::init(&config.log_level);
    debug!("Effective configuration: {:?}", config);

    print_banner(&cli.input, &cli.output);

    let puzzle = Puzzle::from_file(&cli.input)?;
    print_puzzle(&puzzle);

    let progress: Arc<dyn ProgressReporter> = if config.progress {
        Arc::new(ConsoleProgress::new(io::stdout()))
    } else {
        Arc::new(NoProgress)
    };
    let coordinator = SearchCoordinator::from_config(&config).with_progress(progress);

    match config.execution {
        ExecutionMode::ThreadPerWord => println!(
            "\n{} ({} threads)",
            "STARTING SEARCH".bold(),
            puzzle.words.len()
        ),
        ExecutionMode::Pooled => println!(
            "\n{} ({} tasks on {} pooled threads)",
            "STARTING SEARCH".bold(),
            puzzle.words.len(),
            config.thread_count
        ),
    }
    println!("{}", "-".repeat(40));

    let started = Instant::now();
    let results = coordinator.search(&puzzle.grid, &puzzle.words)?;
    let elapsed = started.elapsed();

    println!("{}", "-".repeat(40));
    print_search_results(&results);
    println!("\n{}", Summary::from_results(&results, elapsed));

    report::write_report(&cli.output, &puzzle.grid, &results)?;
    println!(
        "\nResults saved to '{}'",
        cli.output.display().to_string().blue()
    );
    println!("{}", "=".repeat(40));
    Ok(())
}

fn print_banner(input: &Path, output: &Path) {
    println!("{}", "==== WORD SEARCH WITH THREADS ====".bold());
    println!("Input file: {}", input.display());
    println!("Output file: {}", output.display());
    println!("{}\n", "=".repeat(40));
}

fn print_puzzle(puzzle: &Puzzle) {
    println!(
        "Grid: {} rows x {} columns",
        puzzle.grid.rows(),
        puzzle.grid.cols()
    );
    println!("Words to find: [{}]", puzzle.words.join(", "));
}

fn print_search_results(results: &ResultSet) {
    println!("\n{}", "RESULTS SUMMARY:".bold());
    println!("{}\n", "=".repeat(25));

    for outcome in results.outcomes() {
        match outcome {
            SearchOutcome::Found {
                word,
                row,
                col,
                direction,
            } => println!(
                "{} -> {} {}",
                word,
                format!("({},{})", row, col).green(),
                direction
            ),
            SearchOutcome::NotFound { word } => {
                println!("{} -> {}", word, "not found".red())
            }
        }
    }
    println!("\n{}", "=".repeat(25));
}
