//! A solver for 6x6 sliding-vehicle traffic puzzles: drive the exit vehicle
//! through the gap in the right wall in as few moves as possible.

pub mod core;
pub mod game;
pub mod puzzle;
pub mod puzzles;
pub mod search;
pub mod solution;
