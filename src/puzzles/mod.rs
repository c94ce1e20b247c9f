//! Built-in puzzles (compile-time boards).

use crate::game::vehicle::{Orientation, Vehicle, VehicleId};
use crate::puzzle::diagram;
use crate::puzzle::{Puzzle, ResourceLimits, SolveError};

fn h(id: u32, length: u8, row: i8, col: i8) -> Vehicle {
    Vehicle::new(VehicleId(id), Orientation::Horizontal, length, row, col)
}

fn v(id: u32, length: u8, row: i8, col: i8) -> Vehicle {
    Vehicle::new(VehicleId(id), Orientation::Vertical, length, row, col)
}

/// Budgets for demos and CLI runs against built-ins. Far beyond what any of
/// these boards needs, but they keep a typo'd hand-edited puzzle from eating
/// the machine.
pub fn demo_limits() -> ResourceLimits {
    ResourceLimits {
        max_states: 1_000_000,
        max_edges: 25_000_000,
        max_runtime_steps: 50_000_000,
    }
}

/// Two vehicles and an empty exit row: solvable in one merged move.
///
/// This is small enough to be used in tests and fast demos.
pub fn sample_level() -> Puzzle {
    let vehicles = vec![
        h(0, 2, 2, 0).with_color("red"),
        h(1, 3, 0, 0).with_color("yellow"),
    ];
    Puzzle::new(vehicles, VehicleId(0)).with_name("Sample Level")
}

/// One car in front of the exit; the blocker has to duck out first.
pub fn blocked_exit() -> Puzzle {
    let vehicles = vec![
        h(0, 2, 2, 0).with_color("red"),
        v(1, 2, 1, 4).with_color("blue"),
    ];
    Puzzle::new(vehicles, VehicleId(0)).with_name("Blocked Exit")
}

/// The exit car parked in the gap from the start: solves with an empty move
/// list.
pub fn solved_start() -> Puzzle {
    let vehicles = vec![h(0, 2, 2, 4).with_color("red")];
    Puzzle::new(vehicles, VehicleId(0)).with_name("Solved Start")
}

/// The right wall is bricked up with cars that cannot move at all (used for
/// the "no solution" known result).
pub fn gridlocked() -> Puzzle {
    let vehicles = vec![
        h(0, 2, 2, 0).with_color("red"),
        v(1, 2, 0, 5),
        v(2, 2, 2, 5),
        v(3, 2, 4, 5),
    ];
    Puzzle::new(vehicles, VehicleId(0)).with_name("Gridlocked")
}

const CLASSIC_JAM: &str = "\
+------+
|AA...O|
|P..Q.O|
|PXXQ.O>
|P..Q..|
|B...CC|
|B.RRR.|
+------+
";

/// An eight-vehicle board where the whole fleet has to shuffle before `X`
/// gets out.
pub fn classic_jam() -> Result<Puzzle, SolveError> {
    Ok(diagram::parse(CLASSIC_JAM, 'X')?.with_name("Classic Jam"))
}

/// Return a puzzle by name.
pub fn by_name(name: &str) -> Result<Option<Puzzle>, SolveError> {
    match name {
        "sample_level" => Ok(Some(sample_level())),
        "blocked_exit" => Ok(Some(blocked_exit())),
        "solved_start" => Ok(Some(solved_start())),
        "gridlocked" => Ok(Some(gridlocked())),
        "classic_jam" => Ok(Some(classic_jam()?)),
        _ => Ok(None),
    }
}

/// Names of all built-in puzzles.
pub fn names() -> &'static [&'static str] {
    &[
        "sample_level",
        "blocked_exit",
        "solved_start",
        "gridlocked",
        "classic_jam",
    ]
}
