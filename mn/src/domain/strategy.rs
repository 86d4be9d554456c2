//! How the counter is shared between the two producers

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Counter sharing strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Producers send proposals to a Coordinator that owns the counter
    #[default]
    Channel,

    /// Producers lock an `Arc<Mutex<i64>>` for every update
    Mutex,

    /// Producers do an unsynchronized read-modify-write; updates can be lost
    Racy,
}

impl Strategy {
    /// Whether the final value is guaranteed to be the arithmetic sum of all deltas
    pub fn is_deterministic(self) -> bool {
        !matches!(self, Strategy::Racy)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Channel => write!(f, "channel"),
            Strategy::Mutex => write!(f, "mutex"),
            Strategy::Racy => write!(f, "racy"),
        }
    }
}
