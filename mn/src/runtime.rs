//! Runtime construction
//!
//! The number of worker threads is the knob the exercise turns: with one
//! worker the producers can only interleave at suspension points, with two
//! or more they run in parallel.

use eyre::{Context, Result, eyre};
use tokio::runtime::{Builder, Runtime};
use tracing::debug;

/// Build a multi-threaded runtime bounded to `workers` worker threads
pub fn build_runtime(workers: usize) -> Result<Runtime> {
    debug!(%workers, "build_runtime: called");
    if workers == 0 {
        return Err(eyre!("Worker count must be at least 1"));
    }

    Builder::new_multi_thread()
        .worker_threads(workers)
        .thread_name("mn-worker")
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_workers_rejected() {
        assert!(build_runtime(0).is_err());
    }

    #[test]
    fn test_runtime_reports_worker_count() {
        for workers in [1, 2, 4] {
            let runtime = build_runtime(workers).unwrap();
            assert_eq!(runtime.metrics().num_workers(), workers);
        }
    }
}
