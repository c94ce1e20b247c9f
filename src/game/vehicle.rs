use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::cell::Cell;

/// Caller-assigned vehicle identifier, stable for the whole lifetime of a
/// puzzle and of every solve run against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VehicleId(pub u32);

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Cell-to-cell step between consecutive footprint cells, as (row, col).
    #[inline]
    pub fn step(self) -> (i8, i8) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }

    /// The two slide directions available to this orientation, backward
    /// (toward the origin edge) first. Move enumeration follows this order.
    #[inline]
    pub fn directions(self) -> [Direction; 2] {
        match self {
            Orientation::Horizontal => [Direction::Left, Direction::Right],
            Orientation::Vertical => [Direction::Up, Direction::Down],
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "horizontal"),
            Orientation::Vertical => write!(f, "vertical"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Signed unit step as (row, col). Left/up are negative, right/down
    /// positive.
    #[inline]
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
        }
    }

    /// The only orientation allowed to slide this way.
    #[inline]
    pub fn orientation(self) -> Orientation {
        match self {
            Direction::Left | Direction::Right => Orientation::Horizontal,
            Direction::Up | Direction::Down => Orientation::Vertical,
        }
    }

    /// The reverse direction. Sliding a vehicle and then sliding it the
    /// opposite way by the same distance restores the board.
    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// A vehicle shape at a position: the single source of footprint geometry.
///
/// Every occupancy question in the crate (editor placement probes, slide
/// clearance, board validity, the goal test) derives cells through this type,
/// so bounds and collision semantics cannot drift apart between callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub origin: Cell,
    pub orientation: Orientation,
    pub length: u8,
}

impl Placement {
    #[inline]
    pub fn new(origin: Cell, orientation: Orientation, length: u8) -> Self {
        Self {
            origin,
            orientation,
            length,
        }
    }

    /// The occupied cells, origin first.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        let (dr, dc) = self.orientation.step();
        (0..self.length as i8).map(move |i| self.origin.offset(dr * i, dc * i))
    }

    pub fn in_bounds(self) -> bool {
        self.cells().all(Cell::in_bounds)
    }

    pub fn covers(self, cell: Cell) -> bool {
        self.cells().any(|c| c == cell)
    }

    pub fn overlaps(self, other: Placement) -> bool {
        self.cells().any(|c| other.covers(c))
    }

    /// The footprint cell at the leading edge for a slide in `direction`:
    /// the origin for backward slides, the far end for forward slides.
    #[inline]
    pub fn edge(self, direction: Direction) -> Cell {
        match direction {
            Direction::Left | Direction::Up => self.origin,
            Direction::Right | Direction::Down => {
                let (dr, dc) = self.orientation.step();
                let last = self.length as i8 - 1;
                self.origin.offset(dr * last, dc * last)
            }
        }
    }
}

/// A placed vehicle as callers describe it: identity, optional display color,
/// fixed shape, and the current origin cell. Orientation and length never
/// change for a given puzzle; only (row, col) moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: VehicleId,
    #[serde(default)]
    pub color: Option<String>,
    pub orientation: Orientation,
    pub length: u8,
    pub row: i8,
    pub col: i8,
}

impl Vehicle {
    pub fn new(id: VehicleId, orientation: Orientation, length: u8, row: i8, col: i8) -> Self {
        Self {
            id,
            color: None,
            orientation,
            length,
            row,
            col,
        }
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }

    #[inline]
    pub fn origin(&self) -> Cell {
        Cell::new(self.row, self.col)
    }

    #[inline]
    pub fn placement(&self) -> Placement {
        Placement::new(self.origin(), self.orientation, self.length)
    }

    /// "car" for length 2, "truck" otherwise.
    pub fn kind_name(&self) -> &'static str {
        if self.length == 2 {
            "car"
        } else {
            "truck"
        }
    }
}
