//! Counter guarded by a mutex

use std::sync::Mutex;

use eyre::{Result, eyre};

use super::SharedCounter;

/// `Mutex<i64>` counter; every update holds the lock for the read-modify-write
#[derive(Debug, Default)]
pub struct LockedCounter {
    value: Mutex<i64>,
}

impl SharedCounter for LockedCounter {
    fn apply(&self, delta: i64) -> Result<()> {
        let mut value = self.value.lock().map_err(|_| eyre!("Counter mutex poisoned"))?;
        *value += delta;
        Ok(())
    }

    fn value(&self) -> Result<i64> {
        let value = self.value.lock().map_err(|_| eyre!("Counter mutex poisoned"))?;
        Ok(*value)
    }
}
