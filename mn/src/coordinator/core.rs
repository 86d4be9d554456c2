//! Main Coordinator loop

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::config::CoordinatorConfig;
use super::error::CoordinatorError;
use super::handle::ProducerHandle;
use super::messages::{Completion, CoordinatorMetrics, Proposal};
use crate::domain::Direction;

/// The Coordinator owns the counter and serializes every mutation
///
/// Register producers first, hand their handles to concurrent tasks, then
/// await [`Coordinator::run`]. The run ends once every registered producer
/// has signalled completion.
pub struct Coordinator {
    /// Templates for producer handles, dropped when `run` starts
    proposal_tx: mpsc::Sender<Proposal>,
    completion_tx: mpsc::Sender<Completion>,
    proposal_rx: mpsc::Receiver<Proposal>,
    completion_rx: mpsc::Receiver<Completion>,
    expected_completions: usize,
}

impl Coordinator {
    /// Create a new Coordinator with the given configuration
    pub fn new(config: &CoordinatorConfig) -> Result<Self, CoordinatorError> {
        debug!(?config, "Coordinator::new: called");
        if config.channel_capacity == 0 || config.completion_capacity == 0 {
            return Err(CoordinatorError::ZeroCapacity);
        }

        let (proposal_tx, proposal_rx) = mpsc::channel(config.channel_capacity);
        let (completion_tx, completion_rx) = mpsc::channel(config.completion_capacity);
        Ok(Self {
            proposal_tx,
            completion_tx,
            proposal_rx,
            completion_rx,
            expected_completions: 0,
        })
    }

    /// Register a producer and get the handle it sends through
    ///
    /// Each registration raises the number of completion signals `run` waits for.
    pub fn register(&mut self, direction: Direction) -> ProducerHandle {
        debug!(%direction, "Coordinator::register: called");
        self.expected_completions += 1;
        ProducerHandle::new(direction, self.proposal_tx.clone(), self.completion_tx.clone())
    }

    /// Number of completion signals the run waits for
    pub fn expected_completions(&self) -> usize {
        self.expected_completions
    }

    /// Run the Coordinator until every registered producer is done
    ///
    /// Consumes the Coordinator and returns the final counter value along
    /// with what was observed.
    pub async fn run(self) -> Result<(i64, CoordinatorMetrics), CoordinatorError> {
        let Self {
            proposal_tx,
            completion_tx,
            mut proposal_rx,
            mut completion_rx,
            expected_completions: expected,
        } = self;

        // Only producer handles keep the channels open from here on
        drop(proposal_tx);
        drop(completion_tx);

        let mut counter: i64 = 0;
        let mut metrics = CoordinatorMetrics::default();
        let mut proposals_open = true;
        let mut completions_open = true;

        info!(expected, "Coordinator started");

        while metrics.completions_observed < expected {
            tokio::select! {
                proposal = proposal_rx.recv(), if proposals_open => {
                    match proposal {
                        Some(proposal) => {
                            counter += proposal.delta;
                            metrics.record(&proposal);
                        }
                        None => {
                            debug!("run: proposal channel closed");
                            proposals_open = false;
                        }
                    }
                }

                completion = completion_rx.recv(), if completions_open => {
                    match completion {
                        Some(Completion { from }) => {
                            metrics.completions_observed += 1;
                            debug!(%from, completions = metrics.completions_observed, "run: completion signal");
                        }
                        None => {
                            debug!("run: completion channel closed");
                            completions_open = false;
                        }
                    }
                }

                else => {
                    warn!(
                        completions = metrics.completions_observed,
                        expected, "run: every producer dropped its handle early"
                    );
                    return Err(CoordinatorError::ProducersGone {
                        completions: metrics.completions_observed,
                        expected,
                    });
                }
            }
        }

        // A producer's last proposal may still sit in the buffer when its
        // completion wins the select, so apply whatever is left
        while let Ok(proposal) = proposal_rx.try_recv() {
            counter += proposal.delta;
            metrics.record(&proposal);
            metrics.drained_after_completion += 1;
        }
        metrics.thread = Some(std::thread::current().id());

        info!(
            counter,
            proposals = metrics.proposals_applied,
            drained = metrics.drained_after_completion,
            "Coordinator terminated"
        );
        Ok((counter, metrics))
    }
}
