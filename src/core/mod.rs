//! Low-level, allocation-free primitives.
//!
//! These types are intentionally compact and hash-friendly because the search
//! holds large sets of board states:
//!
//! - [`cell`]: grid coordinates, bounds checks, and the dense cell index.
//! - [`board`]: a fixed-capacity per-slot placement (`MAX_VEHICLES`) plus the
//!   packed canonical key used for visited-state detection.

pub mod board;
pub mod cell;
