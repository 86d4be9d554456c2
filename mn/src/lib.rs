//! MagicNumber - shared-variable races versus channel-mediated synchronization
//!
//! Two producers propose increments and decrements against a single counter.
//! In the default strategy every proposal travels over a channel to a
//! Coordinator that owns the counter, so the final value is deterministic no
//! matter how the producers interleave.
//!
//! # Architecture
//!
//! ```text
//! Producer(+1) ──┐ proposals  ┌─────────────┐
//!                ├──────────▶ │ Coordinator │ ── counter (owned)
//! Producer(-1) ──┘ completion └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`coordinator`] - Counter owner, multiplexes proposals and completions
//! - [`producer`] - Incrementer / decrementer workers
//! - [`shared`] - Shared-variable strategies (mutex, racy) for contrast
//! - [`experiment`] - Wires a run together and joins every worker
//! - [`runtime`] - Bounded worker-thread runtime (the parallelism knob)
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface

pub mod cli;
pub mod config;
pub mod coordinator;
pub mod domain;
pub mod experiment;
pub mod producer;
pub mod runtime;
pub mod shared;

pub use config::Config;
pub use coordinator::{
    Completion, Coordinator, CoordinatorConfig, CoordinatorError, CoordinatorMetrics, ProducerHandle, Proposal,
};
pub use domain::{Direction, Outcome, Strategy};
pub use experiment::{Experiment, ExperimentConfig};
pub use producer::{Producer, ProducerReport};
pub use runtime::build_runtime;

/// Default inclusive iteration bound for each producer
pub const DEFAULT_COUNT: u64 = 1_000_000;

/// Default number of runtime worker threads
pub const DEFAULT_WORKERS: usize = 2;

/// Default proposal/completion channel capacity (closest tokio gets to a rendezvous)
pub const DEFAULT_CAPACITY: usize = 1;
