//! ASCII diagrams: a compact way to write puzzles in source and logs.
//!
//! ```text
//! +------+
//! |AA..EE|
//! |......|
//! |BB....>
//! |......|
//! |......|
//! |..DDD.|
//! +------+
//! ```
//!
//! Each uppercase letter is one vehicle (its id is the letter's offset from
//! `A`), `.` is an empty cell, and the `>` in the right wall marks the exit
//! row. Which letter has to escape is not part of the drawing; callers name
//! it when parsing.

use crate::core::board::Board;
use crate::core::cell::{Cell, GRID_SIZE};
use crate::game::fleet::Fleet;
use crate::game::rules::EXIT_ROW;
use crate::game::vehicle::{Orientation, Vehicle, VehicleId};
use crate::puzzle::{Puzzle, SolveError};

fn border() -> String {
    format!("+{}+", "-".repeat(GRID_SIZE as usize))
}

fn invalid(reason: String) -> SolveError {
    SolveError::InvalidPuzzle { reason }
}

/// Parses a diagram into a validated [`Puzzle`] whose exit vehicle is the
/// one drawn with the letter `exit`.
///
/// Blank lines and surrounding whitespace are ignored. Vehicles are numbered
/// by their letters and listed in order of first appearance, reading
/// row-major from the top left.
pub fn parse(text: &str, exit: char) -> Result<Puzzle, SolveError> {
    if !exit.is_ascii_uppercase() {
        return Err(invalid(format!(
            "exit marker {exit:?} must be an uppercase letter"
        )));
    }

    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    let expected = GRID_SIZE as usize + 2;
    if lines.len() != expected {
        return Err(invalid(format!(
            "diagram has {} lines, expected {expected}",
            lines.len()
        )));
    }

    let border = border();
    if lines[0] != border || lines[expected - 1] != border {
        return Err(invalid(format!(
            "diagram must be framed by {border:?} lines"
        )));
    }

    // First-appearance order; a handful of vehicles, so linear lookup is fine.
    let mut runs: Vec<(char, Vec<Cell>)> = Vec::new();

    for (row, line) in lines[1..=GRID_SIZE as usize].iter().enumerate() {
        let chars: Vec<char> = line.chars().collect();
        if chars.len() != GRID_SIZE as usize + 2 {
            return Err(invalid(format!(
                "row {row} is {} characters wide, expected {}",
                chars.len(),
                GRID_SIZE as usize + 2
            )));
        }
        let wall = if row as i8 == EXIT_ROW { '>' } else { '|' };
        if chars[0] != '|' || chars[GRID_SIZE as usize + 1] != wall {
            return Err(invalid(format!(
                "row {row} must be walled by '|' and {wall:?}"
            )));
        }
        for (col, &c) in chars[1..=GRID_SIZE as usize].iter().enumerate() {
            let cell = Cell::new(row as i8, col as i8);
            match c {
                '.' => {}
                'A'..='Z' => match runs.iter_mut().find(|(letter, _)| *letter == c) {
                    Some((_, cells)) => cells.push(cell),
                    None => runs.push((c, vec![cell])),
                },
                other => {
                    return Err(invalid(format!(
                        "unexpected character {other:?} at {cell}"
                    )))
                }
            }
        }
    }

    let mut vehicles = Vec::with_capacity(runs.len());
    for (letter, mut cells) in runs {
        cells.sort();
        let orientation = if cells.iter().all(|c| c.row == cells[0].row) {
            Orientation::Horizontal
        } else if cells.iter().all(|c| c.col == cells[0].col) {
            Orientation::Vertical
        } else {
            return Err(invalid(format!("vehicle {letter} is not a straight run")));
        };
        let (dr, dc) = orientation.step();
        let contiguous = cells
            .windows(2)
            .all(|w| w[1] == w[0].offset(dr, dc));
        if !contiguous {
            return Err(invalid(format!("vehicle {letter} is not contiguous")));
        }
        let origin = cells[0];
        vehicles.push(Vehicle::new(
            VehicleId(letter as u32 - 'A' as u32),
            orientation,
            cells.len() as u8,
            origin.row,
            origin.col,
        ));
    }

    let puzzle = Puzzle::new(vehicles, VehicleId(exit as u32 - 'A' as u32));
    puzzle.validate()?;
    Ok(puzzle)
}

/// Draws `board` in the same format [`parse`] reads.
///
/// Slots whose id is not a letter offset (26 or above) render as `?`; the
/// built-in puzzles and everything `parse` produces stay within `A..=Z`.
pub fn render(fleet: &Fleet, board: &Board) -> String {
    let mut grid = [['.'; GRID_SIZE as usize]; GRID_SIZE as usize];
    for slot in 0..fleet.len() {
        let id = fleet.id_of(slot).0;
        let letter = if id < 26 {
            (b'A' + id as u8) as char
        } else {
            '?'
        };
        for cell in fleet.placement(slot, board).cells() {
            grid[cell.row as usize][cell.col as usize] = letter;
        }
    }

    let border = border();
    let mut out = String::new();
    out.push_str(&border);
    out.push('\n');
    for (row, line) in grid.iter().enumerate() {
        out.push('|');
        for &c in line {
            out.push(c);
        }
        out.push(if row as i8 == EXIT_ROW { '>' } else { '|' });
        out.push('\n');
    }
    out.push_str(&border);
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "\
+------+
|AA..EE|
|......|
|BB....>
|......|
|......|
|..DDD.|
+------+
";

    #[test]
    fn parse_then_render_reproduces_the_diagram() {
        let puzzle = parse(SMALL, 'B').unwrap();
        assert_eq!(puzzle.exit_vehicle, VehicleId(1));
        assert_eq!(puzzle.vehicles.len(), 4);

        let (rules, board) = puzzle.rules_and_board().unwrap();
        assert_eq!(render(rules.fleet(), &board), SMALL);
    }

    #[test]
    fn bent_runs_are_rejected() {
        let bent = "\
+------+
|AA....|
|.A....|
|BB....>
|......|
|......|
|......|
+------+
";
        let err = parse(bent, 'B').unwrap_err();
        assert!(matches!(err, SolveError::InvalidPuzzle { .. }));
    }
}
