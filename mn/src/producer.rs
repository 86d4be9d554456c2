//! Producers - the incrementer and the decrementer
//!
//! A producer holds no state of its own beyond its bound. It proposes its
//! delta once per iteration over the inclusive range `0..=bound`, then sends
//! exactly one completion signal.

use std::thread::ThreadId;

use tracing::{debug, info};

use crate::coordinator::{CoordinatorError, ProducerHandle};
use crate::domain::Direction;

/// What a producer did once it finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProducerReport {
    pub direction: Direction,
    pub sent: u64,
    /// OS thread the producer finished on
    pub thread: ThreadId,
}

/// One concurrent worker proposing a fixed delta
#[derive(Debug)]
pub struct Producer {
    handle: ProducerHandle,
    bound: u64,
}

impl Producer {
    /// Create a producer that sends `bound + 1` proposals through `handle`
    pub fn new(handle: ProducerHandle, bound: u64) -> Self {
        debug!(direction = %handle.direction(), %bound, "Producer::new: called");
        Self { handle, bound }
    }

    pub fn direction(&self) -> Direction {
        self.handle.direction()
    }

    /// Send every proposal, then the completion signal
    ///
    /// Each send suspends until the Coordinator has room, so a stalled
    /// Coordinator stalls the producer.
    pub async fn run(self) -> Result<ProducerReport, CoordinatorError> {
        let direction = self.direction();
        debug!(%direction, bound = self.bound, "Producer::run: called");

        let mut sent = 0u64;
        for _ in 0..=self.bound {
            self.handle.propose().await?;
            sent += 1;
        }

        self.handle.complete().await?;
        info!(%direction, sent, "Producer finished");
        Ok(ProducerReport {
            direction,
            sent,
            thread: std::thread::current().id(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinator::{Coordinator, CoordinatorConfig};

    #[tokio::test]
    async fn test_zero_bound_sends_exactly_one() {
        let mut coordinator = Coordinator::new(&CoordinatorConfig::default()).unwrap();
        let producer = Producer::new(coordinator.register(Direction::Increment), 0);
        assert_eq!(producer.direction(), Direction::Increment);

        let task = tokio::spawn(producer.run());
        let (counter, _) = coordinator.run().await.unwrap();

        assert_eq!(task.await.unwrap().unwrap().sent, 1);
        assert_eq!(counter, 1);
    }

    #[tokio::test]
    async fn test_run_sends_bound_plus_one() {
        let mut coordinator = Coordinator::new(&CoordinatorConfig::default()).unwrap();
        let producer = Producer::new(coordinator.register(Direction::Decrement), 9);

        let task = tokio::spawn(producer.run());
        let (counter, metrics) = coordinator.run().await.unwrap();

        let report = task.await.unwrap().unwrap();
        assert_eq!(report.sent, 10);
        assert_eq!(report.direction, Direction::Decrement);
        assert_eq!(counter, -10);
        assert_eq!(metrics.decrements_applied, 10);
        assert_eq!(metrics.completions_observed, 1);
    }

    #[tokio::test]
    async fn test_run_fails_when_coordinator_is_gone() {
        let mut coordinator = Coordinator::new(&CoordinatorConfig::default()).unwrap();
        let producer = Producer::new(coordinator.register(Direction::Increment), 3);
        drop(coordinator);

        let err = producer.run().await.unwrap_err();
        assert_eq!(err, CoordinatorError::ProducerSend(Direction::Increment));
    }
}
