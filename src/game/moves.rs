use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game::fleet::Fleet;
use crate::game::vehicle::{Direction, VehicleId};

/// One step of a solution as callers see it: slide `vehicle` by `spaces`
/// cells toward `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub vehicle: VehicleId,
    pub direction: Direction,
    pub spaces: u8,
}

impl Move {
    pub fn new(vehicle: VehicleId, direction: Direction, spaces: u8) -> Self {
        Self {
            vehicle,
            direction,
            spaces,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.vehicle, self.direction, self.spaces)
    }
}

/// The solver-internal form of a move: the vehicle named by slot index so the
/// search never touches ids on its hot path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub slot: u8,
    pub direction: Direction,
    pub spaces: u8,
}

impl Slide {
    pub fn new(slot: u8, direction: Direction, spaces: u8) -> Self {
        Self {
            slot,
            direction,
            spaces,
        }
    }

    /// Translates the slot back into the caller's vehicle id.
    pub fn to_move(self, fleet: &Fleet) -> Move {
        Move::new(fleet.id_of(self.slot as usize), self.direction, self.spaces)
    }
}

/// Merges consecutive moves of the same vehicle in the same direction into
/// one move whose distance is the sum, preserving order otherwise.
///
/// Running this twice changes nothing: after one pass no two neighbours share
/// both vehicle and direction. Distances saturate at `u8::MAX`, far beyond
/// anything a six-wide grid can produce.
pub fn compress(moves: &[Move]) -> Vec<Move> {
    let mut out: Vec<Move> = Vec::with_capacity(moves.len());
    for &m in moves {
        match out.last_mut() {
            Some(last) if last.vehicle == m.vehicle && last.direction == m.direction => {
                last.spaces = last.spaces.saturating_add(m.spaces);
            }
            _ => out.push(m),
        }
    }
    out
}
