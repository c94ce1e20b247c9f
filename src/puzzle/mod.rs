//! Puzzle layer: glue between the pure game rules and the solver.
//!
//! A [`Puzzle`] bundles:
//! - the vehicle list exactly as callers (or JSON files) describe it
//! - the id of the vehicle that has to reach the exit
//! - an optional display name
//!
//! `Puzzle::validate()` is the single gate every public entry point passes
//! through; once it succeeds, the slot-indexed [`Fleet`] and its starting
//! [`Board`] can be built without further checks. [`SolveError`] and the
//! resource-budget types shared by all search routines also live here.

pub mod diagram;

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::board::{Board, MAX_VEHICLES};
use crate::game::fleet::Fleet;
use crate::game::rules::{Rules, EXIT_ROW};
use crate::game::vehicle::{Orientation, Vehicle, VehicleId};

#[derive(Debug, Clone, Copy)]
/// Search budgets used to bound memory/time consumption.
///
/// These are not exact byte limits, but correlate strongly with allocation
/// size:
/// - `max_states`: number of boards admitted to the visited set / parent graph
/// - `max_edges`: number of generated slides
/// - `max_runtime_steps`: generic loop-iteration guard
pub struct ResourceLimits {
    pub max_states: usize,
    pub max_edges: usize,
    pub max_runtime_steps: u64,
}

impl ResourceLimits {
    /// No budgets at all. A 6x6 grid has a small reachable space, so the
    /// plain solve entry point runs to completion with these.
    pub const fn unbounded() -> Self {
        Self {
            max_states: usize::MAX,
            max_edges: usize::MAX,
            max_runtime_steps: u64::MAX,
        }
    }
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            max_states: 2_000_000,
            max_edges: 50_000_000,
            max_runtime_steps: 200_000_000,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Running counters tracked during a search.
pub struct ResourceCounts {
    pub states: u64,
    pub edges: u64,
    pub runtime_steps: u64,
}

#[derive(Debug)]
/// Structured errors returned by solve and replay routines.
pub enum SolveError {
    /// The puzzle is internally inconsistent (overlaps, bad shapes, ...).
    InvalidPuzzle { reason: String },
    /// The id named as the exit vehicle does not occur in the vehicle list.
    MissingExitVehicle { vehicle: VehicleId },
    /// A configured resource limit was exceeded.
    LimitExceeded {
        stage: &'static str,
        metric: &'static str,
        limit: u64,
        observed: u64,
        counts: ResourceCounts,
    },
    /// A `try_reserve` allocation failed for a large structure.
    AllocationFailed {
        stage: &'static str,
        structure: &'static str,
        counts: ResourceCounts,
    },
    /// I/O failure (used by file-backed puzzles and solutions).
    Io {
        stage: &'static str,
        path: String,
        error: String,
    },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::InvalidPuzzle { reason } => write!(f, "invalid puzzle: {reason}"),
            SolveError::MissingExitVehicle { vehicle } => {
                write!(f, "exit vehicle {vehicle} is not in the vehicle list")
            }
            SolveError::LimitExceeded {
                stage,
                metric,
                limit,
                observed,
                counts,
            } => write!(
                f,
                "limit exceeded at {stage}: {metric} (limit={limit}, observed={observed}); \
                 counts(states={}, edges={}, runtime_steps={})",
                counts.states, counts.edges, counts.runtime_steps
            ),
            SolveError::AllocationFailed {
                stage,
                structure,
                counts,
            } => write!(
                f,
                "allocation failed at {stage} for {structure}; \
                 counts(states={}, edges={}, runtime_steps={})",
                counts.states, counts.edges, counts.runtime_steps
            ),
            SolveError::Io { stage, path, error } => {
                write!(f, "io error at {stage} for {path}: {error}")
            }
        }
    }
}

impl std::error::Error for SolveError {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A caller-facing puzzle description.
///
/// This is the serialization surface: JSON puzzle files deserialize straight
/// into it. Nothing here is slot-indexed; that translation happens in
/// [`Puzzle::rules_and_board`] after validation.
pub struct Puzzle {
    #[serde(default)]
    pub name: String,
    pub vehicles: Vec<Vehicle>,
    pub exit_vehicle: VehicleId,
}

impl Puzzle {
    pub fn new(vehicles: Vec<Vehicle>, exit_vehicle: VehicleId) -> Self {
        Self {
            name: String::new(),
            vehicles,
            exit_vehicle,
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Validate puzzle invariants. Intended to be called by CLIs/tests before
    /// running solvers; `rules_and_board` calls it on every path.
    pub fn validate(&self) -> Result<(), SolveError> {
        if self.vehicles.is_empty() {
            return Err(SolveError::InvalidPuzzle {
                reason: "the vehicle list is empty".to_string(),
            });
        }

        if self.vehicles.len() > MAX_VEHICLES {
            return Err(SolveError::InvalidPuzzle {
                reason: format!(
                    "{} vehicles listed, at most {MAX_VEHICLES} are supported",
                    self.vehicles.len()
                ),
            });
        }

        for (i, a) in self.vehicles.iter().enumerate() {
            for b in &self.vehicles[..i] {
                if a.id == b.id {
                    return Err(SolveError::InvalidPuzzle {
                        reason: format!("vehicle id {} is listed twice", a.id),
                    });
                }
            }
        }

        for v in &self.vehicles {
            if !(2..=3).contains(&v.length) {
                return Err(SolveError::InvalidPuzzle {
                    reason: format!(
                        "vehicle {} has length {}; cars are 2 and trucks are 3",
                        v.id, v.length
                    ),
                });
            }
            if !v.placement().in_bounds() {
                return Err(SolveError::InvalidPuzzle {
                    reason: format!("vehicle {} does not fit on the grid at {}", v.id, v.origin()),
                });
            }
        }

        for (i, a) in self.vehicles.iter().enumerate() {
            for b in &self.vehicles[..i] {
                if a.placement().overlaps(b.placement()) {
                    return Err(SolveError::InvalidPuzzle {
                        reason: format!("vehicles {} and {} overlap", b.id, a.id),
                    });
                }
            }
        }

        let exit = match self.vehicles.iter().find(|v| v.id == self.exit_vehicle) {
            Some(v) => v,
            None => {
                return Err(SolveError::MissingExitVehicle {
                    vehicle: self.exit_vehicle,
                })
            }
        };

        if exit.orientation != Orientation::Horizontal {
            return Err(SolveError::InvalidPuzzle {
                reason: format!("exit vehicle {} must be horizontal", exit.id),
            });
        }

        if exit.row != EXIT_ROW {
            return Err(SolveError::InvalidPuzzle {
                reason: format!(
                    "exit vehicle {} starts on row {}, the exit is on row {EXIT_ROW}",
                    exit.id, exit.row
                ),
            });
        }

        Ok(())
    }

    /// Validates, then builds the slot-indexed rules and the starting board.
    pub fn rules_and_board(&self) -> Result<(Rules, Board), SolveError> {
        self.validate()?;
        let fleet = Fleet::new(self.vehicles.clone(), self.exit_vehicle);
        let board = fleet.initial_board();
        Ok((Rules::new(fleet), board))
    }

    /// Reads and validates a JSON puzzle file.
    pub fn from_json_file(path: &Path) -> Result<Puzzle, SolveError> {
        let text = fs::read_to_string(path).map_err(|e| SolveError::Io {
            stage: "puzzle_read",
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        let puzzle: Puzzle = serde_json::from_str(&text).map_err(|e| SolveError::Io {
            stage: "puzzle_parse",
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        puzzle.validate()?;
        Ok(puzzle)
    }
}
