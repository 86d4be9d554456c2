//! Shared-variable strategies
//!
//! Both producers mutate the same counter directly instead of sending
//! proposals. [`LockedCounter`] serializes updates with a mutex;
//! [`RacyCounter`] splits every update into a separate load and store so
//! concurrent updates can overwrite each other.

mod mutex;
mod racy;

use std::collections::HashSet;
use std::sync::Arc;
use std::thread::ThreadId;

use eyre::{Result, eyre};
use tokio::task::JoinSet;
use tracing::{debug, info};

use crate::domain::Direction;

pub use mutex::LockedCounter;
pub use racy::RacyCounter;

/// A counter both producers touch directly
pub trait SharedCounter: Send + Sync + 'static {
    /// Apply one delta to the counter
    fn apply(&self, delta: i64) -> Result<()>;

    /// Read the current value
    fn value(&self) -> Result<i64>;
}

/// Run both producers against `counter` and join them
///
/// Bounds are inclusive, like the channel producers: each side applies
/// `bound + 1` deltas. Returns the value read after both tasks finished and
/// the OS threads the workers ran on.
pub async fn run_shared<C: SharedCounter>(
    counter: Arc<C>,
    increments: u64,
    decrements: u64,
) -> Result<(i64, HashSet<ThreadId>)> {
    debug!(%increments, %decrements, "run_shared: called");
    let mut workers = JoinSet::new();

    for (direction, bound) in [(Direction::Increment, increments), (Direction::Decrement, decrements)] {
        let counter = Arc::clone(&counter);
        workers.spawn(async move {
            let delta = direction.delta();
            for _ in 0..=bound {
                counter.apply(delta)?;
            }
            debug!(%direction, "run_shared: worker finished");
            Ok::<_, eyre::Report>(std::thread::current().id())
        });
    }

    let mut threads = HashSet::new();
    while let Some(joined) = workers.join_next().await {
        threads.insert(joined.map_err(|e| eyre!("Shared-counter worker failed: {}", e))??);
    }

    let value = counter.value()?;
    info!(value, threads = threads.len(), "run_shared: all workers joined");
    Ok((value, threads))
}
