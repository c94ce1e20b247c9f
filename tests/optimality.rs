use std::collections::{HashMap, VecDeque};

use gridlock::core::board::Board;
use gridlock::core::cell::{Cell, GRID_SIZE};
use gridlock::game::fleet::Fleet;
use gridlock::game::vehicle::Orientation;
use gridlock::puzzle::Puzzle;
use gridlock::puzzles;
use gridlock::search::bfs::{solve, SolveOutcome};

/// The cells `slot` covers, computed from scratch.
fn footprint(fleet: &Fleet, slot: usize, board: &Board) -> Vec<(i8, i8)> {
    let v = fleet.vehicle(slot);
    let origin = board.get(slot);
    (0..v.length as i8)
        .map(|i| match v.orientation {
            Orientation::Horizontal => (origin.row, origin.col + i),
            Orientation::Vertical => (origin.row + i, origin.col),
        })
        .collect()
}

fn on_grid(cell: (i8, i8)) -> bool {
    (0..GRID_SIZE).contains(&cell.0) && (0..GRID_SIZE).contains(&cell.1)
}

/// Whole-board validity from first principles: every cell on the grid, no
/// cell covered twice.
fn board_is_valid(fleet: &Fleet, board: &Board) -> bool {
    let mut seen: Vec<(i8, i8)> = Vec::new();
    for slot in 0..fleet.len() {
        for cell in footprint(fleet, slot, board) {
            if !on_grid(cell) || seen.contains(&cell) {
                return false;
            }
            seen.push(cell);
        }
    }
    true
}

/// Every board one legal slide away, enumerated without the solver's move
/// generator: walk each vehicle one cell at a time along its axis and keep
/// going while the whole board still re-validates. A k-cell slide is legal
/// exactly when all k unit steps are, so this reproduces the slide rules by
/// construction rather than by sharing code with them.
fn reference_successors(fleet: &Fleet, board: &Board) -> Vec<Board> {
    let mut out = Vec::new();
    for slot in 0..fleet.len() {
        let (dr, dc) = match fleet.vehicle(slot).orientation {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        };
        for sign in [-1i8, 1] {
            let mut current = board.clone();
            loop {
                let origin = current.get(slot);
                let mut next = current.clone();
                next.set(
                    slot,
                    Cell::new(origin.row + dr * sign, origin.col + dc * sign),
                );
                if !board_is_valid(fleet, &next) {
                    break;
                }
                out.push(next.clone());
                current = next;
            }
        }
    }
    out
}

/// Goal check from first principles: the exit vehicle covers the last column.
fn reference_is_goal(fleet: &Fleet, board: &Board) -> bool {
    footprint(fleet, fleet.exit_slot(), board)
        .iter()
        .any(|&(_, col)| col == GRID_SIZE - 1)
}

/// Reference search: shortest slide count computed with none of the solver's
/// machinery. Moves, validity, and the goal are all re-derived above, whole
/// boards serve as hash keys instead of packed keys, and there are no parent
/// links and no budgets.
fn reference_distance(puzzle: &Puzzle) -> Option<u32> {
    let (rules, start) = puzzle.rules_and_board().unwrap();
    let fleet = rules.fleet();

    let mut dist: HashMap<Board, u32> = HashMap::new();
    let mut queue: VecDeque<Board> = VecDeque::new();
    dist.insert(start.clone(), 0);
    queue.push_back(start);

    while let Some(board) = queue.pop_front() {
        // The solver's predicates have to agree with the from-scratch ones on
        // every board the naive enumeration reaches.
        assert!(rules.is_valid_board(&board));
        assert_eq!(rules.is_goal(&board), reference_is_goal(fleet, &board));

        let d = dist[&board];
        if reference_is_goal(fleet, &board) {
            return Some(d);
        }
        for next in reference_successors(fleet, &board) {
            if !dist.contains_key(&next) {
                dist.insert(next.clone(), d + 1);
                queue.push_back(next);
            }
        }
    }
    None
}

#[test]
fn solver_lengths_match_the_reference_search() {
    for name in puzzles::names() {
        let puzzle = puzzles::by_name(name)
            .unwrap()
            .unwrap_or_else(|| panic!("{name} is registered"));

        match (solve(&puzzle).unwrap(), reference_distance(&puzzle)) {
            (SolveOutcome::Solved(s), Some(d)) => {
                assert_eq!(s.atomic_moves, d, "atomic length mismatch for {name}");
                assert!(
                    s.moves.len() as u32 <= s.atomic_moves,
                    "merging grew the path for {name}"
                );
            }
            (SolveOutcome::NoSolution { .. }, None) => {}
            (SolveOutcome::Solved(_), None) => {
                panic!("{name}: solver found a path the reference search did not")
            }
            (SolveOutcome::NoSolution { .. }, Some(_)) => {
                panic!("{name}: reference search found a path the solver did not")
            }
        }
    }
}
