//! Search routines (shortest-solution BFS, resource budgets).

pub mod bfs;
pub mod resources;
