use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use gridlock::puzzle::SolveError;
use gridlock::puzzles;
use gridlock::search::bfs::{solve, Solution, SolveOutcome};
use gridlock::solution::{load_solution, save_solution};

fn unique_temp_dir(name: &str) -> PathBuf {
    let base = std::env::temp_dir().join("gridlock_tests").join(name);
    let _ = fs::create_dir_all(&base);

    let pid = std::process::id();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();

    for i in 0..1000u32 {
        let p = base.join(format!("{pid}-{nanos}-{i}"));
        if fs::create_dir(&p).is_ok() {
            return p;
        }
    }

    panic!(
        "failed to create a unique temp dir under {}",
        base.display()
    );
}

fn solve_blocked_exit() -> Solution {
    match solve(&puzzles::blocked_exit()).unwrap() {
        SolveOutcome::Solved(s) => s,
        SolveOutcome::NoSolution { .. } => panic!("blocked_exit is solvable"),
    }
}

#[test]
fn solution_files_roundtrip_for_blocked_exit() {
    let dir = unique_temp_dir("solution_roundtrip");
    let path = dir.join("blocked_exit.solution.json");

    let puzzle = puzzles::blocked_exit();
    let solution = solve_blocked_exit();
    save_solution(&path, &puzzle, &solution).unwrap();

    let loaded = load_solution(&path).unwrap();
    assert_eq!(loaded.manifest.puzzle, puzzle);
    assert_eq!(loaded.manifest.moves, solution.moves);
    assert_eq!(loaded.manifest.atomic_moves, solution.atomic_moves);
    assert_eq!(loaded.manifest.counts.states, solution.counts.states);
    assert_eq!(loaded.manifest.counts.edges, solution.counts.edges);
    assert_eq!(loaded.replay.len(), solution.moves.len());

    let mut replay = loaded.replay;
    while replay.step_forward().is_some() {}
    assert!(replay.is_solved());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn tampered_solution_files_fail_to_load() {
    let dir = unique_temp_dir("solution_tampered");
    let path = dir.join("blocked_exit.solution.json");

    let puzzle = puzzles::blocked_exit();
    let solution = solve_blocked_exit();
    save_solution(&path, &puzzle, &solution).unwrap();
    let text = fs::read_to_string(&path).unwrap();

    // A future format version is rejected up front.
    let versioned = text.replace("\"format_version\": 1", "\"format_version\": 99");
    fs::write(&path, &versioned).unwrap();
    match load_solution(&path) {
        Err(SolveError::InvalidPuzzle { reason }) => {
            assert!(reason.contains("format_version"), "reason was: {reason}")
        }
        other => panic!("expected InvalidPuzzle, got {other:?}"),
    }

    // A move stretched past the wall fails replay validation.
    let stretched = text.replace("\"spaces\": 4", "\"spaces\": 5");
    assert_ne!(stretched, text, "expected the final 4-cell move in the file");
    fs::write(&path, &stretched).unwrap();
    assert!(matches!(
        load_solution(&path),
        Err(SolveError::InvalidPuzzle { .. })
    ));

    let _ = fs::remove_dir_all(&dir);
}
