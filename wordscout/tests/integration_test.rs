use anyhow::Result;
use std::fs;
use std::num::NonZeroUsize;
use tempfile::tempdir;
use wordscout::metrics::SearchMetrics;
use wordscout::search::find_word;
use wordscout::{
    report, search, Direction, ExecutionMode, Grid, Puzzle, ResultOrder, SearchCoordinator,
    SearchOutcome,
};

fn found(word: &str, row: usize, col: usize, direction: Direction) -> SearchOutcome {
    SearchOutcome::Found {
        word: word.to_string(),
        row,
        col,
        direction,
    }
}

fn not_found(word: &str) -> SearchOutcome {
    SearchOutcome::NotFound {
        word: word.to_string(),
    }
}

fn letter_grid(rows: usize, cols: usize) -> Result<Grid> {
    let lines: Vec<String> = (0..rows)
        .map(|r| {
            (0..cols)
                .map(|c| (b'a' + ((r * 7 + c * 3) % 26) as u8) as char)
                .collect()
        })
        .collect();
    Ok(Grid::new(lines)?)
}

#[test]
fn test_path_longer_than_grid_is_not_found() -> Result<()> {
    let grid = Grid::new(["ABCE", "SFCS", "ADEE"])?;
    let results = search(&grid, &["ABCCED"])?;
    assert_eq!(results.into_iter().collect::<Vec<_>>(), vec![not_found("ABCCED")]);
    Ok(())
}

#[test]
fn test_single_row_and_single_column() -> Result<()> {
    let row = Grid::new(["CAT"])?;
    let column = Grid::new(["C", "A", "T"])?;

    let results = search(&row, &["CAT"])?;
    assert_eq!(results.outcomes().next(), Some(&found("CAT", 1, 1, Direction::Right)));

    let results = search(&column, &["CAT"])?;
    assert_eq!(results.outcomes().next(), Some(&found("CAT", 1, 1, Direction::Down)));
    Ok(())
}

#[test]
fn test_duplicate_words_are_reported_twice() -> Result<()> {
    let grid = Grid::new(["CAT"])?;
    let results = search(&grid, &["CAT", "CAT"])?;
    let outcomes: Vec<_> = results.into_iter().collect();
    assert_eq!(
        outcomes,
        vec![
            found("CAT", 1, 1, Direction::Right),
            found("CAT", 1, 1, Direction::Right)
        ]
    );
    Ok(())
}

#[test]
fn test_case_insensitive_both_ways() -> Result<()> {
    let upper = Grid::new(["DOG", "XXX"])?;
    let lower = Grid::new(["dog", "xxx"])?;

    assert_eq!(find_word(&upper, "dog"), found("dog", 1, 1, Direction::Right));
    assert_eq!(find_word(&lower, "DOG"), found("DOG", 1, 1, Direction::Right));
    assert_eq!(find_word(&lower, "gOd"), found("gOd", 1, 3, Direction::Left));
    Ok(())
}

#[test]
fn test_outcome_does_not_depend_on_load() -> Result<()> {
    let grid = letter_grid(12, 15)?;
    let words: Vec<String> = ["ahov", "dkry", "hov", "zzz", "eh", "vvv"]
        .iter()
        .map(|w| w.to_string())
        .collect();

    let expected: Vec<_> = words.iter().map(|w| find_word(&grid, w)).collect();

    // Same words repeated many times so the tasks compete for CPU and the sink.
    let repeated: Vec<String> = words.iter().cycle().take(words.len() * 40).cloned().collect();
    let results = SearchCoordinator::new()
        .with_result_order(ResultOrder::Input)
        .search(&grid, &repeated)?;

    for (i, outcome) in results.outcomes().enumerate() {
        assert_eq!(outcome, &expected[i % words.len()]);
    }
    Ok(())
}

#[test]
fn test_no_lost_updates_under_contention() -> Result<()> {
    let grid = Grid::new(["ab", "cd"])?;
    let words: Vec<String> = (0..400).map(|i| format!("w{}", i)).collect();

    for execution in [ExecutionMode::ThreadPerWord, ExecutionMode::Pooled] {
        let coordinator = SearchCoordinator::new()
            .with_execution(execution)
            .with_thread_count(NonZeroUsize::new(8).unwrap());
        let metrics = SearchMetrics::new();
        let results = coordinator.search_with_metrics(&grid, &words, &metrics)?;

        assert_eq!(results.len(), words.len());
        let mut ids: Vec<_> = results.reports().iter().map(|r| r.task_id).collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=words.len()).collect::<Vec<_>>());

        let stats = metrics.get_stats();
        assert_eq!(stats.tasks_launched, words.len() as u64);
        assert_eq!(stats.tasks_completed, words.len() as u64);
    }
    Ok(())
}

#[test]
fn test_puzzle_file_to_report() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("puzzle.txt");
    let output = dir.path().join("report.txt");
    fs::write(&input, "3 3\ncat\nodx\nweg\ncow\nzebra\ngdc\n")?;

    let puzzle = Puzzle::from_file(&input)?;
    let results = SearchCoordinator::new()
        .with_result_order(ResultOrder::Input)
        .search(&puzzle.grid, &puzzle.words)?;
    report::write_report(&output, &puzzle.grid, &results)?;

    assert_eq!(
        fs::read_to_string(&output)?,
        "Cat\nODx\nWeG\n\ncow (1,1): down\nzebra: not found\ngdc (3,3): up-left\n"
    );
    Ok(())
}
