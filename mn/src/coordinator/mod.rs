//! Coordinator: the sole owner of the counter
//!
//! Producers never touch the counter. They push proposals and a final
//! completion signal through two channels; the Coordinator multiplexes both
//! with `tokio::select!` and applies proposals one at a time.

mod config;
mod core;
mod error;
mod handle;
mod messages;

pub use config::CoordinatorConfig;
pub use core::Coordinator;
pub use error::CoordinatorError;
pub use handle::ProducerHandle;
pub use messages::{Completion, CoordinatorMetrics, Proposal};
