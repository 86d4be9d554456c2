//! Result of a single experiment run

use std::time::Duration;

use crate::coordinator::CoordinatorMetrics;

use super::Strategy;

/// What a run produced
#[derive(Debug, Clone)]
pub struct Outcome {
    /// Strategy the run used
    pub strategy: Strategy,

    /// Runtime worker threads available to the producers
    pub workers: usize,

    /// Final counter value
    pub magic_number: i64,

    /// Value the counter would hold if no update was lost
    pub expected: i64,

    /// Coordinator metrics (channel strategy only)
    pub metrics: Option<CoordinatorMetrics>,

    /// Distinct OS threads the coordinator and workers finished on
    pub execution_contexts: usize,

    /// Wall-clock time from spawning producers to the last join
    pub elapsed: Duration,
}

impl Outcome {
    /// Number of updates that went missing (racy strategy can lose some)
    pub fn lost_updates(&self) -> i64 {
        (self.expected - self.magic_number).abs()
    }

    /// The single line the program reports on stdout
    pub fn report_line(&self) -> String {
        format!("The magic number is: {}", self.magic_number)
    }
}
