//! Coordinator configuration

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Coordinator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CoordinatorConfig {
    /// Buffer size of the proposal channel (tokio requires at least 1)
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,

    /// Buffer size of the completion channel
    #[serde(default = "default_completion_capacity")]
    pub completion_capacity: usize,
}

fn default_channel_capacity() -> usize {
    debug!("default_channel_capacity: called");
    crate::DEFAULT_CAPACITY
}

fn default_completion_capacity() -> usize {
    debug!("default_completion_capacity: called");
    crate::DEFAULT_CAPACITY
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        debug!("CoordinatorConfig::default: called");
        Self {
            channel_capacity: default_channel_capacity(),
            completion_capacity: default_completion_capacity(),
        }
    }
}

impl CoordinatorConfig {
    /// Config with both channels sized to `capacity`
    pub fn with_capacity(capacity: usize) -> Self {
        debug!(%capacity, "CoordinatorConfig::with_capacity: called");
        Self {
            channel_capacity: capacity,
            completion_capacity: capacity,
        }
    }
}
