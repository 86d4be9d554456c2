//! Coordinator error types

use thiserror::Error;

use crate::domain::Direction;

/// Errors that end a coordinated run
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoordinatorError {
    #[error("All producers went away after {completions} of {expected} completion signals")]
    ProducersGone { completions: usize, expected: usize },

    #[error("The {0} could not reach the coordinator (channel closed)")]
    ProducerSend(Direction),

    #[error("Channel capacity must be at least 1")]
    ZeroCapacity,
}
