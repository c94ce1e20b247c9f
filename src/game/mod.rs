//! The vehicle game itself, independent of search.
//!
//! - [`vehicle`]: ids, orientations, directions, and the [`Placement`]
//!   footprint primitive.
//! - [`fleet`]: the slot-indexed roster built from a caller's vehicle list.
//! - [`moves`]: public [`Move`] records, solver-internal [`Slide`]s, and move
//!   compression.
//! - [`rules`]: occupancy checks, slide generation, and the goal test.
//!
//! [`Placement`]: vehicle::Placement
//! [`Move`]: moves::Move
//! [`Slide`]: moves::Slide

pub mod fleet;
pub mod moves;
pub mod rules;
pub mod vehicle;
