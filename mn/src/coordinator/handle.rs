//! ProducerHandle - the sending side a producer gets from the Coordinator

use tokio::sync::mpsc;
use tracing::debug;

use super::error::CoordinatorError;
use super::messages::{Completion, Proposal};
use crate::domain::Direction;

/// Handle a producer uses to talk to the Coordinator
///
/// Holds clones of the Coordinator's senders, never the counter itself.
#[derive(Debug, Clone)]
pub struct ProducerHandle {
    direction: Direction,
    proposal_tx: mpsc::Sender<Proposal>,
    completion_tx: mpsc::Sender<Completion>,
}

impl ProducerHandle {
    pub(crate) fn new(
        direction: Direction,
        proposal_tx: mpsc::Sender<Proposal>,
        completion_tx: mpsc::Sender<Completion>,
    ) -> Self {
        debug!(%direction, "ProducerHandle::new: called");
        Self {
            direction,
            proposal_tx,
            completion_tx,
        }
    }

    /// Direction this handle was registered for
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Send one proposal, suspending until the Coordinator has room for it
    pub async fn propose(&self) -> Result<(), CoordinatorError> {
        self.proposal_tx
            .send(Proposal::from_direction(self.direction))
            .await
            .map_err(|_| CoordinatorError::ProducerSend(self.direction))
    }

    /// Signal that this producer is done; consumes the handle
    pub async fn complete(self) -> Result<(), CoordinatorError> {
        debug!(direction = %self.direction, "ProducerHandle::complete: called");
        self.completion_tx
            .send(Completion { from: self.direction })
            .await
            .map_err(|_| CoordinatorError::ProducerSend(self.direction))?;

        debug!(direction = %self.direction, "ProducerHandle::complete: sent");
        Ok(())
    }
}
