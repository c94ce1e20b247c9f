use crate::core::board::{Board, MAX_VEHICLES};
use crate::core::cell::Cell;
use crate::game::vehicle::{Placement, Vehicle, VehicleId};

/// The fixed roster of a puzzle: every vehicle's identity and shape, in slot
/// order, plus the slot of the vehicle that has to escape.
///
/// Slots are the dense indices the solver works in. Slot `i` is the `i`-th
/// vehicle of the caller's list, and a [`Board`] stores exactly one origin
/// cell per slot. Identity, color, orientation, and length never change
/// during a solve, so they live here rather than in the board.
#[derive(Debug, Clone)]
pub struct Fleet {
    vehicles: Vec<Vehicle>,
    exit_slot: usize,
}

impl Fleet {
    /// Builds the roster. The vehicle list must be non-empty, within
    /// [`MAX_VEHICLES`], free of duplicate ids, and contain `exit_vehicle`;
    /// [`Puzzle::validate`](crate::puzzle::Puzzle::validate) checks all of
    /// this (and more) on every public path, so violations here are caller
    /// bugs.
    pub fn new(vehicles: Vec<Vehicle>, exit_vehicle: VehicleId) -> Self {
        assert!(!vehicles.is_empty(), "a fleet needs at least one vehicle");
        assert!(
            vehicles.len() <= MAX_VEHICLES,
            "a fleet holds at most {MAX_VEHICLES} vehicles"
        );
        for (i, a) in vehicles.iter().enumerate() {
            for b in &vehicles[..i] {
                assert!(a.id != b.id, "duplicate vehicle id {}", a.id);
            }
        }
        let exit_slot = vehicles
            .iter()
            .position(|v| v.id == exit_vehicle)
            .unwrap_or_else(|| panic!("exit vehicle {exit_vehicle} is not in the fleet"));
        Self {
            vehicles,
            exit_slot,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    #[inline]
    pub fn exit_slot(&self) -> usize {
        self.exit_slot
    }

    #[inline]
    pub fn exit_id(&self) -> VehicleId {
        self.vehicles[self.exit_slot].id
    }

    /// The vehicle record for a slot, at its original position.
    #[inline]
    pub fn vehicle(&self, slot: usize) -> &Vehicle {
        &self.vehicles[slot]
    }

    #[inline]
    pub fn id_of(&self, slot: usize) -> VehicleId {
        self.vehicles[slot].id
    }

    pub fn slot_of(&self, id: VehicleId) -> Option<usize> {
        self.vehicles.iter().position(|v| v.id == id)
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// The board holding every vehicle at its original origin.
    pub fn initial_board(&self) -> Board {
        let mut cells = [Cell::new(0, 0); MAX_VEHICLES];
        for (slot, v) in self.vehicles.iter().enumerate() {
            cells[slot] = v.origin();
        }
        Board::new(self.vehicles.len(), cells)
    }

    /// The footprint of `slot` with its origin taken from `board`.
    #[inline]
    pub fn placement(&self, slot: usize, board: &Board) -> Placement {
        let v = &self.vehicles[slot];
        Placement::new(board.get(slot), v.orientation, v.length)
    }

    /// The vehicle record for a slot with (row, col) updated from `board`,
    /// for callers that render or report positions mid-solution.
    pub fn positioned(&self, slot: usize, board: &Board) -> Vehicle {
        let mut v = self.vehicles[slot].clone();
        let origin = board.get(slot);
        v.row = origin.row;
        v.col = origin.col;
        v
    }
}
