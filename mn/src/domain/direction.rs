//! Producer direction

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which way a producer pushes the counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    Increment,
    Decrement,
}

impl Direction {
    /// The delta applied to the counter for one proposal
    pub fn delta(self) -> i64 {
        match self {
            Direction::Increment => 1,
            Direction::Decrement => -1,
        }
    }

    /// Both directions, incrementer first
    pub fn all() -> [Direction; 2] {
        [Direction::Increment, Direction::Decrement]
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Increment => write!(f, "incrementer"),
            Direction::Decrement => write!(f, "decrementer"),
        }
    }
}
