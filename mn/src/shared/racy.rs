//! Counter with an unsynchronized read-modify-write
//!
//! Load and store are individually atomic, so there is no undefined
//! behaviour, but the pair is not: two workers can read the same value and
//! one of the writes is lost.

use std::sync::atomic::{AtomicI64, Ordering};

use eyre::Result;

use super::SharedCounter;

#[derive(Debug, Default)]
pub struct RacyCounter {
    value: AtomicI64,
}

impl SharedCounter for RacyCounter {
    fn apply(&self, delta: i64) -> Result<()> {
        let current = self.value.load(Ordering::Relaxed);
        self.value.store(current + delta, Ordering::Relaxed);
        Ok(())
    }

    fn value(&self) -> Result<i64> {
        Ok(self.value.load(Ordering::SeqCst))
    }
}
