//! Message types exchanged with the Coordinator

use std::thread::ThreadId;

use crate::domain::Direction;

/// A requested mutation of the counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Proposal {
    pub from: Direction,
    pub delta: i64,
}

impl Proposal {
    /// Build the proposal a producer of the given direction sends
    pub fn from_direction(from: Direction) -> Self {
        Self {
            from,
            delta: from.delta(),
        }
    }
}

/// Signal that a producer has exhausted its proposals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub from: Direction,
}

/// Counts of everything the Coordinator observed during a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoordinatorMetrics {
    pub proposals_applied: u64,
    pub increments_applied: u64,
    pub decrements_applied: u64,
    pub completions_observed: usize,
    /// Proposals still buffered when the last completion arrived
    pub drained_after_completion: u64,
    /// OS thread the loop finished on
    pub thread: Option<ThreadId>,
}

impl CoordinatorMetrics {
    pub(crate) fn record(&mut self, proposal: &Proposal) {
        self.proposals_applied += 1;
        match proposal.from {
            Direction::Increment => self.increments_applied += 1,
            Direction::Decrement => self.decrements_applied += 1,
        }
    }
}
