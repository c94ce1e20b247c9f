//! Board mechanics: occupancy, move generation, slide application, goal test.
//!
//! Everything here answers cell-occupancy questions through
//! [`Placement`](crate::game::vehicle::Placement), so the editor probe
//! ([`can_place`]), the slide generator, and board validation cannot disagree
//! about what counts as blocked.

use crate::core::board::Board;
use crate::core::cell::{Cell, GRID_SIZE};
use crate::game::fleet::Fleet;
use crate::game::moves::Slide;
use crate::game::vehicle::{Orientation, Placement, Vehicle, VehicleId};

/// Row the exit sits on. The gap in the right wall is fixed at this row.
pub const EXIT_ROW: i8 = 2;

/// Column of the cell directly inside the exit gap.
pub const EXIT_COL: i8 = GRID_SIZE - 1;

/// Placement probe for editors and validation: may a vehicle of the given
/// shape sit with its origin at (row, col) without leaving the grid or
/// overlapping any vehicle in `vehicles`?
///
/// `excluding` names a vehicle whose footprint is ignored, so a caller can
/// test a new position for a vehicle that is already on the board.
pub fn can_place(
    row: i8,
    col: i8,
    orientation: Orientation,
    length: u8,
    vehicles: &[Vehicle],
    excluding: Option<VehicleId>,
) -> bool {
    let probe = Placement::new(Cell::new(row, col), orientation, length);
    if !probe.in_bounds() {
        return false;
    }
    vehicles
        .iter()
        .filter(|v| Some(v.id) != excluding)
        .all(|v| !probe.overlaps(v.placement()))
}

/// Slide mechanics for one fleet.
///
/// A `Rules` value is built once per solve or replay and then queried with
/// plain [`Board`] values; it owns the fleet so footprints can be derived
/// from slot origins alone.
#[derive(Debug, Clone)]
pub struct Rules {
    fleet: Fleet,
}

impl Rules {
    pub fn new(fleet: Fleet) -> Self {
        Self { fleet }
    }

    #[inline]
    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn initial_board(&self) -> Board {
        self.fleet.initial_board()
    }

    /// Whether any vehicle other than `skip` covers `cell`.
    fn occupied_except(&self, board: &Board, cell: Cell, skip: usize) -> bool {
        (0..self.fleet.len())
            .filter(|&slot| slot != skip)
            .any(|slot| self.fleet.placement(slot, board).covers(cell))
    }

    /// Whether every vehicle is on the grid and no two overlap.
    pub fn is_valid_board(&self, board: &Board) -> bool {
        let n = self.fleet.len();
        for slot in 0..n {
            if !self.fleet.placement(slot, board).in_bounds() {
                return false;
            }
        }
        for a in 0..n {
            for b in 0..a {
                let pa = self.fleet.placement(a, board);
                if pa.overlaps(self.fleet.placement(b, board)) {
                    return false;
                }
            }
        }
        true
    }

    /// Every legal slide from `board`, paired with the board it produces.
    ///
    /// Slides are enumerated slot by slot in ascending order; per slot the
    /// backward direction (left or up) comes before the forward one, and per
    /// direction distances grow from 1 until the first blocked or off-grid
    /// cell. Only the newly swept cell needs checking at each distance: the
    /// rest of the corridor was already clear at the previous distance.
    pub fn slides_from(&self, board: &Board) -> Vec<(Slide, Board)> {
        let mut out = Vec::new();
        for slot in 0..self.fleet.len() {
            let placement = self.fleet.placement(slot, board);
            let bound = (GRID_SIZE - placement.length as i8) as u8;
            for direction in placement.orientation.directions() {
                let (dr, dc) = direction.delta();
                let edge = placement.edge(direction);
                for spaces in 1..=bound {
                    let swept = edge.offset(dr * spaces as i8, dc * spaces as i8);
                    if !swept.in_bounds() || self.occupied_except(board, swept, slot) {
                        break;
                    }
                    let origin = board.get(slot).offset(dr * spaces as i8, dc * spaces as i8);
                    let mut next = board.clone();
                    next.set(slot, origin);
                    out.push((Slide::new(slot as u8, direction, spaces), next));
                }
            }
        }
        out
    }

    /// Whether `slide` can be played on `board`: the direction matches the
    /// vehicle's orientation and every cell it sweeps is free and on the
    /// grid. Used to vet externally supplied moves before replaying them.
    pub fn is_slide_clear(&self, board: &Board, slide: Slide) -> bool {
        let slot = slide.slot as usize;
        if slot >= self.fleet.len() {
            return false;
        }
        let placement = self.fleet.placement(slot, board);
        if slide.direction.orientation() != placement.orientation {
            return false;
        }
        let (dr, dc) = slide.direction.delta();
        let edge = placement.edge(slide.direction);
        for step in 1..=slide.spaces as i8 {
            let swept = edge.offset(dr * step, dc * step);
            if !swept.in_bounds() || self.occupied_except(board, swept, slot) {
                return false;
            }
        }
        true
    }

    /// The board after playing `slide`.
    ///
    /// Panics if the slide's direction does not match the vehicle's
    /// orientation: a slide can only ever be built from the orientation's own
    /// direction pair, so a mismatch means corrupted state and there is
    /// nothing sensible to recover to.
    pub fn apply_slide(&self, board: &Board, slide: Slide) -> Board {
        let slot = slide.slot as usize;
        let vehicle = self.fleet.vehicle(slot);
        assert!(
            slide.direction.orientation() == vehicle.orientation,
            "cannot slide {} {}: the vehicle is {}",
            vehicle.id,
            slide.direction,
            vehicle.orientation,
        );
        let (dr, dc) = slide.direction.delta();
        let n = slide.spaces as i8;
        let mut next = board.clone();
        next.set(slot, board.get(slot).offset(dr * n, dc * n));
        next
    }

    /// Whether the exit vehicle stands in the exit gap, covering the cell at
    /// ([`EXIT_ROW`], [`EXIT_COL`]). From there it drives straight out.
    pub fn is_goal(&self, board: &Board) -> bool {
        self.fleet
            .placement(self.fleet.exit_slot(), board)
            .covers(Cell::new(EXIT_ROW, EXIT_COL))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::vehicle::Direction;

    fn two_car_fleet() -> Fleet {
        // Exit car on the exit row, one vertical car in its way.
        let vehicles = vec![
            Vehicle::new(VehicleId(0), Orientation::Horizontal, 2, EXIT_ROW, 0),
            Vehicle::new(VehicleId(1), Orientation::Vertical, 2, 1, 4),
        ];
        Fleet::new(vehicles, VehicleId(0))
    }

    #[test]
    fn can_place_respects_bounds_overlap_and_exclusion() {
        let fleet = two_car_fleet();
        let vehicles = fleet.vehicles();

        // Off the right edge.
        assert!(!can_place(0, 5, Orientation::Horizontal, 2, vehicles, None));
        // On top of the vertical car.
        assert!(!can_place(2, 4, Orientation::Vertical, 2, vehicles, None));
        // Same spot, but we are asking about moving that car itself.
        assert!(can_place(
            2,
            4,
            Orientation::Vertical,
            2,
            vehicles,
            Some(VehicleId(1))
        ));
        // Free corner.
        assert!(can_place(4, 0, Orientation::Horizontal, 3, vehicles, None));
    }

    #[test]
    fn slide_generation_stops_at_first_blocker() {
        let fleet = two_car_fleet();
        let rules = Rules::new(fleet);
        let board = rules.initial_board();

        let exit_slides: Vec<Slide> = rules
            .slides_from(&board)
            .into_iter()
            .map(|(slide, _)| slide)
            .filter(|slide| slide.slot == 0)
            .collect();

        // The blocker covering (2, 4) caps the exit car at 2 cells to the
        // right; at the left wall there is nowhere to go.
        assert_eq!(
            exit_slides,
            vec![
                Slide::new(0, Direction::Right, 1),
                Slide::new(0, Direction::Right, 2),
            ]
        );
    }

    #[test]
    fn a_slide_and_its_reverse_cancel() {
        let rules = Rules::new(two_car_fleet());
        let board = rules.initial_board();

        for (slide, next) in rules.slides_from(&board) {
            let back = Slide::new(slide.slot, slide.direction.opposite(), slide.spaces);
            assert!(rules.is_slide_clear(&next, back));
            assert_eq!(rules.apply_slide(&next, back).key(), board.key());
        }
    }

    #[test]
    fn goal_requires_the_exit_cell() {
        let fleet = two_car_fleet();
        let rules = Rules::new(fleet);
        let board = rules.initial_board();
        assert!(!rules.is_goal(&board));

        let at_exit = rules.apply_slide(
            &rules.apply_slide(&board, Slide::new(1, Direction::Up, 1)),
            Slide::new(0, Direction::Right, 4),
        );
        assert!(rules.is_goal(&at_exit));
    }

    #[test]
    #[should_panic(expected = "cannot slide")]
    fn sliding_across_the_grain_panics() {
        let fleet = two_car_fleet();
        let rules = Rules::new(fleet);
        let board = rules.initial_board();
        rules.apply_slide(&board, Slide::new(0, Direction::Down, 1));
    }
}
