use std::io::{self, Write};
use std::path::Path;

use gridlock::puzzle::diagram;
use gridlock::puzzles;
use gridlock::search::bfs::{solve_with_limits, SolveOutcome};
use gridlock::solution::{load_solution, Replay};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!(
            "Usage: play <puzzle-or-solution>\n\n\
             Pass a built-in puzzle name to solve and step through it, or a\n\
             solution file written by `solve --save`.\n\n\
             Built-in puzzles:\n  - {}",
            puzzles::names().join("\n  - ")
        );
        std::process::exit(2);
    }

    let source = &args[1];
    let mut replay = open_replay(source);

    print_help();

    loop {
        if replay.is_solved() {
            print!("{}", diagram::render(replay.rules().fleet(), replay.board()));
            println!(
                "The exit is clear. Solved in {} moves.",
                replay.cursor()
            );
            break;
        }

        print!("{}", diagram::render(replay.rules().fleet(), replay.board()));

        let next = match replay.next_move() {
            Some(m) => m.to_string(),
            None => "-".to_string(),
        };
        print!(
            "move {}/{} | next:{} > ",
            replay.cursor(),
            replay.len(),
            next
        );
        io::stdout().flush().ok();

        let mut line = String::new();
        if io::stdin().read_line(&mut line).is_err() {
            break;
        }
        let cmd = line.trim();

        match cmd {
            "" | "n" | "next" => match replay.step_forward() {
                Some(m) => println!("Played {m}"),
                None => println!("Already at the end."),
            },
            "b" | "back" => match replay.step_back() {
                Some(m) => println!("Took back {m}"),
                None => println!("Already at the start."),
            },
            "r" | "reset" => {
                replay.reset();
                println!("Back to the start.");
            }
            "c" | "cars" => {
                let fleet = replay.rules().fleet();
                for slot in 0..fleet.len() {
                    let v = fleet.positioned(slot, replay.board());
                    let marker = if slot == fleet.exit_slot() { " (exit)" } else { "" };
                    println!(
                        "  {} {} {} at {}{marker}",
                        v.id,
                        v.kind_name(),
                        v.orientation,
                        v.origin()
                    );
                }
            }
            "help" => print_help(),
            "exit" | "quit" | "q" => break,
            other => println!("Unknown input '{other}'. Type 'help' for commands."),
        }
    }
}

fn open_replay(source: &str) -> Replay {
    match puzzles::by_name(source) {
        Ok(Some(puzzle)) => {
            let outcome = match solve_with_limits(&puzzle, puzzles::demo_limits()) {
                Ok(o) => o,
                Err(e) => {
                    eprintln!("Failed to solve {source}: {e}");
                    std::process::exit(1);
                }
            };
            let solution = match outcome {
                SolveOutcome::Solved(s) => s,
                SolveOutcome::NoSolution { .. } => {
                    println!("{source} has no solution; nothing to play.");
                    std::process::exit(0);
                }
            };
            println!(
                "Solved {source}: {} moves ({} atomic slides)",
                solution.moves.len(),
                solution.atomic_moves
            );
            match Replay::new(&puzzle, &solution.moves) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Failed to replay {source}: {e}");
                    std::process::exit(1);
                }
            }
        }
        Ok(None) => match load_solution(Path::new(source)) {
            Ok(loaded) => {
                let name = if loaded.manifest.puzzle.name.is_empty() {
                    source.to_string()
                } else {
                    loaded.manifest.puzzle.name.clone()
                };
                println!("Loaded {name}: {} moves", loaded.replay.len());
                loaded.replay
            }
            Err(e) => {
                eprintln!(
                    "{source} is not a built-in puzzle and did not load as a \
                     solution file: {e}\n\nBuilt-in puzzles:\n  - {}",
                    puzzles::names().join("\n  - ")
                );
                std::process::exit(1);
            }
        },
        Err(e) => {
            eprintln!("Failed to load puzzle {source}: {e}");
            std::process::exit(1);
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  next (or Enter)  play the next move");
    println!("  back             take back the last move");
    println!("  reset            jump back to the start");
    println!("  cars             list every vehicle and where it stands");
    println!("  help             show this text");
    println!("  quit             leave");
}
