//! CLI argument parsing for magicnumber
//!
//! Every flag is optional; `mn` with no arguments runs the classic
//! experiment.

use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

use crate::config::Config;
use crate::domain::Strategy;

#[derive(Parser, Debug)]
#[command(name = "mn")]
#[command(author, version, about = "Two producers, one counter, and the magic number they agree on", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// Runtime worker threads (overrides MN_WORKERS and the config file)
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Inclusive bound for both producers
    #[arg(short = 'n', long)]
    pub count: Option<u64>,

    /// Inclusive bound for the incrementer only
    #[arg(long)]
    pub increments: Option<u64>,

    /// Inclusive bound for the decrementer only
    #[arg(long)]
    pub decrements: Option<u64>,

    /// How the counter is shared
    #[arg(short, long, value_enum)]
    pub strategy: Option<Strategy>,

    /// Coordinator channel capacity
    #[arg(long)]
    pub capacity: Option<usize>,

    /// Print run statistics to stderr after the result
    #[arg(long)]
    pub stats: bool,
}

impl Cli {
    /// Overlay command-line values on top of `config`
    ///
    /// `--increments` / `--decrements` win over `--count` for their side.
    pub fn apply(&self, config: &mut Config) {
        debug!(cli = ?self, "Cli::apply: called");
        if let Some(workers) = self.workers {
            config.workers = workers;
        }
        if let Some(count) = self.count {
            config.increments = count;
            config.decrements = count;
        }
        if let Some(increments) = self.increments {
            config.increments = increments;
        }
        if let Some(decrements) = self.decrements {
            config.decrements = decrements;
        }
        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
        if let Some(capacity) = self.capacity {
            config.coordinator.channel_capacity = capacity;
            config.coordinator.completion_capacity = capacity;
        }
        if let Some(level) = &self.log_level {
            config.log_level = Some(level.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["mn"]).unwrap();
        let mut config = Config::default();
        cli.apply(&mut config);

        assert!(!cli.stats);
        assert_eq!(config.workers, 2);
        assert_eq!(config.increments, 1_000_000);
        assert_eq!(config.strategy, Strategy::Channel);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "mn", "-w", "1", "-n", "10", "--decrements", "3", "-s", "racy", "--capacity", "8", "--stats",
        ])
        .unwrap();
        let mut config = Config::default();
        cli.apply(&mut config);

        assert!(cli.stats);
        assert_eq!(config.workers, 1);
        assert_eq!(config.increments, 10);
        assert_eq!(config.decrements, 3);
        assert_eq!(config.strategy, Strategy::Racy);
        assert_eq!(config.coordinator.channel_capacity, 8);
        assert_eq!(config.coordinator.completion_capacity, 8);
    }

    #[test]
    fn test_unknown_strategy_rejected() {
        assert!(Cli::try_parse_from(["mn", "--strategy", "spinlock"]).is_err());
    }
}
