//! Resource tracking and allocation guards for search routines.
//!
//! A 6x6 board keeps the reachable space small, but callers can still feed
//! the solver in tight loops or embed it where memory is scarce. Solvers
//! therefore use:
//! - counter-based budgets ([`crate::puzzle::ResourceLimits`])
//! - `try_reserve` wrappers to surface allocation failures as
//!   [`crate::puzzle::SolveError`]
//!
//! The tracker is intentionally lightweight: budgets are approximate but
//! correlate strongly with memory usage.

use std::collections::VecDeque;

use crate::puzzle::{ResourceCounts, ResourceLimits, SolveError};

#[derive(Debug, Clone)]
/// Tracks budgets/counters during a search.
pub struct ResourceTracker {
    limits: ResourceLimits,
    counts: ResourceCounts,
}

impl ResourceTracker {
    #[inline]
    pub fn new(limits: ResourceLimits) -> Self {
        Self {
            limits,
            counts: ResourceCounts::default(),
        }
    }

    #[inline]
    pub fn counts(&self) -> ResourceCounts {
        self.counts
    }

    #[inline]
    pub fn bump_states(&mut self, stage: &'static str, delta: usize) -> Result<(), SolveError> {
        self.bump(
            stage,
            "states",
            delta as u64,
            self.limits.max_states as u64,
            |c| &mut c.states,
        )
    }

    #[inline]
    pub fn bump_edges(&mut self, stage: &'static str, delta: usize) -> Result<(), SolveError> {
        self.bump(
            stage,
            "edges",
            delta as u64,
            self.limits.max_edges as u64,
            |c| &mut c.edges,
        )
    }

    #[inline]
    pub fn bump_steps(&mut self, stage: &'static str, delta: u64) -> Result<(), SolveError> {
        self.bump(
            stage,
            "runtime_steps",
            delta,
            self.limits.max_runtime_steps,
            |c| &mut c.runtime_steps,
        )
    }

    fn bump(
        &mut self,
        stage: &'static str,
        metric: &'static str,
        delta: u64,
        limit: u64,
        field: impl FnOnce(&mut ResourceCounts) -> &mut u64,
    ) -> Result<(), SolveError> {
        let observed = {
            let v = field(&mut self.counts);
            *v = v.saturating_add(delta);
            *v
        };

        if observed > limit {
            return Err(SolveError::LimitExceeded {
                stage,
                metric,
                limit,
                observed,
                counts: self.counts,
            });
        }

        Ok(())
    }

    pub fn try_reserve_vec<T>(
        &self,
        stage: &'static str,
        structure: &'static str,
        v: &mut Vec<T>,
        additional: usize,
    ) -> Result<(), SolveError> {
        v.try_reserve(additional)
            .map_err(|_| SolveError::AllocationFailed {
                stage,
                structure,
                counts: self.counts,
            })
    }

    pub fn try_reserve_deque<T>(
        &self,
        stage: &'static str,
        structure: &'static str,
        q: &mut VecDeque<T>,
        additional: usize,
    ) -> Result<(), SolveError> {
        q.try_reserve(additional)
            .map_err(|_| SolveError::AllocationFailed {
                stage,
                structure,
                counts: self.counts,
            })
    }

    pub fn try_reserve_set<K>(
        &self,
        stage: &'static str,
        structure: &'static str,
        set: &mut rustc_hash::FxHashSet<K>,
        additional: usize,
    ) -> Result<(), SolveError>
    where
        K: std::hash::Hash + Eq,
    {
        set.try_reserve(additional)
            .map_err(|_| SolveError::AllocationFailed {
                stage,
                structure,
                counts: self.counts,
            })
    }
}
