//! Experiment - wires producers to a strategy and joins every worker
//!
//! Channels are created here and handed to the Coordinator and producers
//! explicitly; nothing lives at process scope. All spawned tasks are joined
//! through a `JoinSet` before the outcome is reported.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread::ThreadId;
use std::time::Instant;

use eyre::{Context, Result, eyre};
use tokio::task::JoinSet;
use tracing::{debug, info};

use crate::coordinator::{Coordinator, CoordinatorConfig, CoordinatorMetrics};
use crate::domain::{Direction, Outcome, Strategy};
use crate::producer::Producer;
use crate::shared::{LockedCounter, RacyCounter, run_shared};

/// Parameters of a single run
#[derive(Debug, Clone)]
pub struct ExperimentConfig {
    pub strategy: Strategy,

    /// Inclusive bound for the incrementer (sends `increments + 1` proposals)
    pub increments: u64,

    /// Inclusive bound for the decrementer (sends `decrements + 1` proposals)
    pub decrements: u64,

    pub coordinator: CoordinatorConfig,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            increments: crate::DEFAULT_COUNT,
            decrements: crate::DEFAULT_COUNT,
            coordinator: CoordinatorConfig::default(),
        }
    }
}

impl ExperimentConfig {
    /// Symmetric run with the same bound for both producers
    pub fn symmetric(strategy: Strategy, count: u64) -> Self {
        Self {
            strategy,
            increments: count,
            decrements: count,
            ..Default::default()
        }
    }

    /// Value the counter holds if every delta is applied exactly once
    pub fn expected(&self) -> i64 {
        (self.increments as i64 + 1) - (self.decrements as i64 + 1)
    }

    fn bound(&self, direction: Direction) -> u64 {
        match direction {
            Direction::Increment => self.increments,
            Direction::Decrement => self.decrements,
        }
    }
}

/// A single run of the counter experiment
pub struct Experiment {
    config: ExperimentConfig,
}

impl Experiment {
    pub fn new(config: ExperimentConfig) -> Self {
        debug!(?config, "Experiment::new: called");
        Self { config }
    }

    /// Run to completion on the current tokio runtime
    pub async fn run(&self) -> Result<Outcome> {
        let workers = tokio::runtime::Handle::current().metrics().num_workers();
        info!(strategy = %self.config.strategy, workers, "Experiment starting");

        let started = Instant::now();
        let (magic_number, metrics, threads) = match self.config.strategy {
            Strategy::Channel => {
                let (value, metrics, threads) = self.run_channel().await?;
                (value, Some(metrics), threads)
            }
            Strategy::Mutex => {
                let (value, threads) = run_shared(
                    Arc::new(LockedCounter::default()),
                    self.config.increments,
                    self.config.decrements,
                )
                .await?;
                (value, None, threads)
            }
            Strategy::Racy => {
                let (value, threads) = run_shared(
                    Arc::new(RacyCounter::default()),
                    self.config.increments,
                    self.config.decrements,
                )
                .await?;
                (value, None, threads)
            }
        };
        let elapsed = started.elapsed();

        info!(magic_number, ?elapsed, threads = threads.len(), "Experiment finished");
        Ok(Outcome {
            strategy: self.config.strategy,
            workers,
            magic_number,
            expected: self.config.expected(),
            metrics,
            execution_contexts: threads.len(),
            elapsed,
        })
    }

    /// The Coordinator is spawned like the producers, so every unit is
    /// scheduled on the runtime's bounded worker pool
    async fn run_channel(&self) -> Result<(i64, CoordinatorMetrics, HashSet<ThreadId>)> {
        debug!("run_channel: called");
        let mut coordinator = Coordinator::new(&self.config.coordinator).context("Failed to create coordinator")?;

        let mut producers = JoinSet::new();
        for direction in Direction::all() {
            let producer = Producer::new(coordinator.register(direction), self.config.bound(direction));
            producers.spawn(producer.run());
        }

        let coordinator = tokio::spawn(coordinator.run());
        let result = coordinator
            .await
            .map_err(|e| eyre!("Coordinator task failed: {}", e))?;

        // Join every producer before reporting; a panicked producer is fatal
        let mut sent = 0u64;
        let mut threads = HashSet::new();
        while let Some(joined) = producers.join_next().await {
            let report = joined
                .map_err(|e| eyre!("Producer task failed: {}", e))?
                .context("Producer could not deliver its proposals")?;
            sent += report.sent;
            threads.insert(report.thread);
        }
        debug!(sent, "run_channel: all producers joined");

        let (value, metrics) = result.context("Coordinator stopped before every producer completed")?;
        threads.extend(metrics.thread);
        Ok((value, metrics, threads))
    }
}
