//! Shortest-solution solver: breadth-first search over board configurations.
//!
//! Semantics:
//! - One edge per generated slide, whatever its distance, so "shortest" means
//!   the fewest atomic slides. Merging collinear slides afterwards never
//!   reorders anything (see [`compress`]).
//! - The visited set is keyed on packed board keys and is seeded with the
//!   start, so the start board is never re-admitted through a cycle.
//! - The goal test runs when a board is dequeued; a start that already sits
//!   in the exit solves with an empty move list.
//! - An exhausted frontier is a normal outcome ([`SolveOutcome::NoSolution`]),
//!   not an error. Errors are reserved for bad input and blown budgets.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use crate::core::board::{Board, StateKey};
use crate::game::moves::{compress, Move, Slide};
use crate::game::rules::Rules;
use crate::puzzle::{Puzzle, ResourceCounts, ResourceLimits, SolveError};
use crate::search::resources::ResourceTracker;

/// One explored board plus the slide that reached it, indexed by position in
/// the node arena. The root carries no parent.
#[derive(Debug, Clone)]
struct Node {
    board: Board,
    parent: Option<(u32, Slide)>,
}

#[derive(Debug, Clone)]
/// A shortest solution, ready to hand to callers.
pub struct Solution {
    /// The path with collinear runs merged; what players step through.
    pub moves: Vec<Move>,
    /// Slides on the path before merging. Never smaller than `moves.len()`.
    pub atomic_moves: u32,
    /// Counters at the moment the goal was dequeued.
    pub counts: ResourceCounts,
}

#[derive(Debug, Clone)]
/// What a completed search found out about a puzzle.
pub enum SolveOutcome {
    Solved(Solution),
    /// The reachable space was exhausted without touching the exit.
    NoSolution { counts: ResourceCounts },
}

impl SolveOutcome {
    #[inline]
    pub fn counts(&self) -> ResourceCounts {
        match self {
            SolveOutcome::Solved(solution) => solution.counts,
            SolveOutcome::NoSolution { counts } => *counts,
        }
    }
}

/// Solves `puzzle` to completion, without budgets.
///
/// The reachable space of a 6x6 board is small enough that this always
/// terminates quickly; embedders that want hard ceilings anyway use
/// [`solve_with_limits`].
pub fn solve(puzzle: &Puzzle) -> Result<SolveOutcome, SolveError> {
    solve_with_limits(puzzle, ResourceLimits::unbounded())
}

/// Solves `puzzle` under explicit resource budgets.
pub fn solve_with_limits(
    puzzle: &Puzzle,
    limits: ResourceLimits,
) -> Result<SolveOutcome, SolveError> {
    let (rules, start) = puzzle.rules_and_board()?;
    run(&rules, start, limits)
}

fn run(rules: &Rules, start: Board, limits: ResourceLimits) -> Result<SolveOutcome, SolveError> {
    let mut tracker = ResourceTracker::new(limits);

    let mut nodes: Vec<Node> = Vec::new();
    let mut visited: FxHashSet<StateKey> = FxHashSet::default();
    let mut frontier: VecDeque<u32> = VecDeque::new();

    // Seed with the start board.
    tracker.bump_states("bfs_seed", 1)?;
    tracker.try_reserve_set("bfs_seed", "visited_keys", &mut visited, 1)?;
    visited.insert(start.key());
    tracker.try_reserve_vec("bfs_seed", "node_arena", &mut nodes, 1)?;
    nodes.push(Node {
        board: start,
        parent: None,
    });
    tracker.try_reserve_deque("bfs_seed", "frontier", &mut frontier, 1)?;
    frontier.push_back(0);

    while let Some(index) = frontier.pop_front() {
        tracker.bump_steps("bfs_loop", 1)?;

        let board = nodes[index as usize].board.clone();
        if rules.is_goal(&board) {
            return Ok(SolveOutcome::Solved(reconstruct(
                rules,
                &nodes,
                index,
                tracker.counts(),
            )));
        }

        let slides = rules.slides_from(&board);
        tracker.bump_edges("bfs_expand", slides.len())?;

        for (slide, next) in slides {
            let key: StateKey = next.key();
            if visited.contains(&key) {
                continue;
            }

            tracker.bump_states("bfs_expand", 1)?;
            tracker.try_reserve_set("bfs_expand", "visited_keys", &mut visited, 1)?;
            visited.insert(key);

            let child = u32::try_from(nodes.len()).map_err(|_| SolveError::InvalidPuzzle {
                reason: "too many states to index with u32".to_string(),
            })?;
            tracker.try_reserve_vec("bfs_expand", "node_arena", &mut nodes, 1)?;
            nodes.push(Node {
                board: next,
                parent: Some((index, slide)),
            });
            tracker.try_reserve_deque("bfs_expand", "frontier", &mut frontier, 1)?;
            frontier.push_back(child);
        }
    }

    Ok(SolveOutcome::NoSolution {
        counts: tracker.counts(),
    })
}

/// Walks parent links from the goal node back to the root, then merges
/// collinear runs.
fn reconstruct(rules: &Rules, nodes: &[Node], goal: u32, counts: ResourceCounts) -> Solution {
    let mut slides: Vec<Slide> = Vec::new();
    let mut cursor = goal as usize;
    while let Some((parent, slide)) = nodes[cursor].parent {
        slides.push(slide);
        cursor = parent as usize;
    }
    slides.reverse();

    let fleet = rules.fleet();
    let atomic: Vec<Move> = slides.iter().map(|s| s.to_move(fleet)).collect();
    let moves = compress(&atomic);

    Solution {
        moves,
        atomic_moves: atomic.len() as u32,
        counts,
    }
}
