//! Saved solutions and move-by-move replay.
//!
//! A solution file is intended to be:
//! - **stable**: it embeds the full puzzle, so it replays even if the
//!   built-in puzzle code changes, and
//! - **fast to play**: [`Replay`] validates every move once at construction
//!   and precomputes the board after each, so stepping around is infallible.
//!
//! See `src/bin/solve.rs` and `src/bin/play.rs` for the user-facing tools.

use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::core::board::Board;
use crate::game::moves::{Move, Slide};
use crate::game::rules::Rules;
use crate::puzzle::{Puzzle, SolveError};
use crate::search::bfs::Solution;

const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolutionManifest {
    pub format_version: u32,
    pub created_unix_secs: u64,
    pub puzzle: Puzzle,
    pub moves: Vec<Move>,
    pub atomic_moves: u32,
    pub counts: CountsManifest,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CountsManifest {
    pub states: u64,
    pub edges: u64,
    pub runtime_steps: u64,
}

/// Writes `solution` (as produced by [`crate::search::bfs::solve`]) and the
/// puzzle it solves to a single JSON file.
pub fn save_solution(path: &Path, puzzle: &Puzzle, solution: &Solution) -> Result<(), SolveError> {
    let created_unix_secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let manifest = SolutionManifest {
        format_version: FORMAT_VERSION,
        created_unix_secs,
        puzzle: puzzle.clone(),
        moves: solution.moves.clone(),
        atomic_moves: solution.atomic_moves,
        counts: CountsManifest {
            states: solution.counts.states,
            edges: solution.counts.edges,
            runtime_steps: solution.counts.runtime_steps,
        },
    };

    let f = fs::File::create(path).map_err(|e| SolveError::Io {
        stage: "solution_save_create",
        path: path.display().to_string(),
        error: e.to_string(),
    })?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer_pretty(&mut w, &manifest).map_err(|e| SolveError::Io {
        stage: "solution_save_serialize",
        path: path.display().to_string(),
        error: e.to_string(),
    })?;
    w.flush().map_err(|e| SolveError::Io {
        stage: "solution_save_flush",
        path: path.display().to_string(),
        error: e.to_string(),
    })
}

/// Loaded solution plus a ready-to-step replay.
#[derive(Debug, Clone)]
pub struct LoadedSolution {
    pub manifest: SolutionManifest,
    pub replay: Replay,
}

/// Reads a solution file back and re-validates everything in it: the format
/// version, the embedded puzzle, and every move against the board it is
/// played on.
pub fn load_solution(path: &Path) -> Result<LoadedSolution, SolveError> {
    let f = fs::File::open(path).map_err(|e| SolveError::Io {
        stage: "solution_load_open",
        path: path.display().to_string(),
        error: e.to_string(),
    })?;
    let manifest: SolutionManifest =
        serde_json::from_reader(BufReader::new(f)).map_err(|e| SolveError::Io {
            stage: "solution_load_parse",
            path: path.display().to_string(),
            error: e.to_string(),
        })?;

    if manifest.format_version != FORMAT_VERSION {
        return Err(SolveError::InvalidPuzzle {
            reason: format!(
                "unsupported solution format_version {} (expected {FORMAT_VERSION})",
                manifest.format_version
            ),
        });
    }

    let replay = Replay::new(&manifest.puzzle, &manifest.moves)?;
    Ok(LoadedSolution { manifest, replay })
}

/// A validated move list with a cursor over it.
///
/// Construction replays every move once, rejecting anything unplayable, and
/// keeps the board after each step. `step_forward`/`step_back` just move the
/// cursor, so the interactive CLI never has to handle mid-play errors.
#[derive(Debug, Clone)]
pub struct Replay {
    rules: Rules,
    moves: Vec<Move>,
    boards: Vec<Board>,
    cursor: usize,
}

impl Replay {
    pub fn new(puzzle: &Puzzle, moves: &[Move]) -> Result<Replay, SolveError> {
        let (rules, start) = puzzle.rules_and_board()?;

        let mut boards = Vec::with_capacity(moves.len() + 1);
        boards.push(start);
        for (i, m) in moves.iter().enumerate() {
            let board = boards[i].clone();
            let slot = rules.fleet().slot_of(m.vehicle).ok_or_else(|| {
                SolveError::InvalidPuzzle {
                    reason: format!("move {} names unknown vehicle {}", i + 1, m.vehicle),
                }
            })?;
            if m.spaces == 0 {
                return Err(SolveError::InvalidPuzzle {
                    reason: format!("move {} has zero distance", i + 1),
                });
            }
            let vehicle = rules.fleet().vehicle(slot);
            if m.direction.orientation() != vehicle.orientation {
                return Err(SolveError::InvalidPuzzle {
                    reason: format!(
                        "move {} slides {} {} but the vehicle is {}",
                        i + 1,
                        m.vehicle,
                        m.direction,
                        vehicle.orientation
                    ),
                });
            }
            let slide = Slide::new(slot as u8, m.direction, m.spaces);
            if !rules.is_slide_clear(&board, slide) {
                return Err(SolveError::InvalidPuzzle {
                    reason: format!("move {} ({m}) is blocked or leaves the grid", i + 1),
                });
            }
            boards.push(rules.apply_slide(&board, slide));
        }

        Ok(Replay {
            rules,
            moves: moves.to_vec(),
            boards,
            cursor: 0,
        })
    }

    #[inline]
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Number of moves in the replayed list.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Moves already played.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// The board after `cursor` moves.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.boards[self.cursor]
    }

    #[inline]
    pub fn at_start(&self) -> bool {
        self.cursor == 0
    }

    #[inline]
    pub fn at_end(&self) -> bool {
        self.cursor == self.moves.len()
    }

    /// Whether the current board already has the exit vehicle in the gap.
    pub fn is_solved(&self) -> bool {
        self.rules.is_goal(self.board())
    }

    /// The move `step_forward` would play next.
    pub fn next_move(&self) -> Option<Move> {
        self.moves.get(self.cursor).copied()
    }

    /// Plays the next move, returning it, or `None` at the end.
    pub fn step_forward(&mut self) -> Option<Move> {
        let m = self.next_move()?;
        self.cursor += 1;
        Some(m)
    }

    /// Takes back the last played move, returning it, or `None` at the start.
    pub fn step_back(&mut self) -> Option<Move> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.moves[self.cursor])
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}
