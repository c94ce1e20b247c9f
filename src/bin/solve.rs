use std::path::Path;

use gridlock::puzzle::diagram;
use gridlock::puzzle::Puzzle;
use gridlock::puzzles;
use gridlock::search::bfs::{solve_with_limits, SolveOutcome};
use gridlock::solution::save_solution;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!(
            "Usage: solve <puzzle> [--save <path>]\n\n\
             <puzzle> is a built-in name or a JSON puzzle file.\n\n\
             Built-in puzzles:\n  - {}",
            puzzles::names().join("\n  - ")
        );
        std::process::exit(2);
    }

    let source = &args[1];
    let mut save_path: Option<String> = None;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--save" => {
                let Some(p) = args.get(i + 1) else {
                    eprintln!("--save requires a file path");
                    std::process::exit(2);
                };
                save_path = Some(p.clone());
                i += 2;
            }
            x => {
                eprintln!("Unknown option: {x}");
                std::process::exit(2);
            }
        }
    }

    let puzzle = load_puzzle(source);
    let display_name = if puzzle.name.is_empty() {
        source.clone()
    } else {
        puzzle.name.clone()
    };

    println!("Puzzle: {display_name}");
    match puzzle.rules_and_board() {
        Ok((rules, board)) => print!("{}", diagram::render(rules.fleet(), &board)),
        Err(e) => {
            eprintln!("Invalid puzzle {display_name}: {e}");
            std::process::exit(1);
        }
    }

    let outcome = match solve_with_limits(&puzzle, puzzles::demo_limits()) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Failed to solve {display_name}: {e}");
            std::process::exit(1);
        }
    };

    let counts = outcome.counts();
    match &outcome {
        SolveOutcome::Solved(solution) => {
            println!(
                "Solved: {} moves ({} atomic slides)",
                solution.moves.len(),
                solution.atomic_moves
            );
            for (i, m) in solution.moves.iter().enumerate() {
                println!("  {}. {m}", i + 1);
            }
            if let Some(path) = save_path {
                match save_solution(Path::new(&path), &puzzle, solution) {
                    Ok(()) => println!("Saved solution to {path}"),
                    Err(e) => {
                        eprintln!("Failed to save solution: {e}");
                        std::process::exit(1);
                    }
                }
            }
        }
        SolveOutcome::NoSolution { .. } => {
            println!("No solution: the exit is unreachable from this board.");
            if save_path.is_some() {
                println!("Nothing was saved.");
            }
        }
    }
    println!(
        "counts: states={} edges={} runtime_steps={}",
        counts.states, counts.edges, counts.runtime_steps
    );
}

fn load_puzzle(source: &str) -> Puzzle {
    match puzzles::by_name(source) {
        Ok(Some(p)) => p,
        Ok(None) => {
            let path = Path::new(source);
            if !path.exists() {
                eprintln!(
                    "Unknown puzzle: {source}\n\nBuilt-in puzzles:\n  - {}",
                    puzzles::names().join("\n  - ")
                );
                std::process::exit(2);
            }
            match Puzzle::from_json_file(path) {
                Ok(p) => p,
                Err(e) => {
                    eprintln!("Failed to load puzzle {source}: {e}");
                    std::process::exit(1);
                }
            }
        }
        Err(e) => {
            eprintln!("Failed to load puzzle {source}: {e}");
            std::process::exit(1);
        }
    }
}
