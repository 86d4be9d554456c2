//! Configuration for magicnumber
//!
//! Every field has a default that reproduces the classic run: two workers,
//! a bound of one million per producer and the channel strategy. Running
//! without a config file is the normal case.

use std::path::{Path, PathBuf};

use eyre::{Context, Result, eyre};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::coordinator::CoordinatorConfig;
use crate::domain::Strategy;
use crate::experiment::ExperimentConfig;

/// Environment variable overriding the worker count
pub const WORKERS_ENV: &str = "MN_WORKERS";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// How the counter is shared
    #[serde(default)]
    pub strategy: Strategy,

    /// Runtime worker threads (the parallelism bound)
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Inclusive bound for the incrementer
    #[serde(default = "default_count")]
    pub increments: u64,

    /// Inclusive bound for the decrementer
    #[serde(default = "default_count")]
    pub decrements: u64,

    /// Coordinator channel sizing
    #[serde(default)]
    pub coordinator: CoordinatorConfig,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[serde(default)]
    pub log_level: Option<String>,

    /// File this config was read from, if any
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

fn default_workers() -> usize {
    crate::DEFAULT_WORKERS
}

fn default_count() -> u64 {
    crate::DEFAULT_COUNT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            workers: default_workers(),
            increments: default_count(),
            decrements: default_count(),
            coordinator: CoordinatorConfig::default(),
            log_level: None,
            source: None,
        }
    }
}

impl Config {
    /// Load config from file, or use defaults
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        debug!(?path, "Config::load: called");
        if let Some(config_path) = path {
            return Self::load_file(config_path);
        }

        // Try default locations
        let default_paths = [
            dirs::config_dir().map(|p| p.join("magicnumber").join("config.yml")),
            Some(PathBuf::from("magicnumber.yml")),
        ];

        for path in default_paths.iter().flatten() {
            if path.exists() {
                info!(path = %path.display(), "Config::load: found default config");
                return Self::load_file(path);
            }
        }

        debug!("Config::load: no config file, using defaults");
        Ok(Config::default())
    }

    fn load_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config: Config =
            serde_yaml::from_str(&content).with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Apply environment overrides using `lookup` to read variables
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(WORKERS_ENV) {
            debug!(%raw, "Config::apply_env: worker override");
            self.workers = raw
                .trim()
                .parse()
                .map_err(|_| eyre!("{} must be a positive integer, got '{}'", WORKERS_ENV, raw))?;
        }
        Ok(())
    }

    /// Reject values no run can work with
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(eyre!("workers must be at least 1"));
        }
        // Bounds are inclusive, so bound + 1 deltas must fit in the i64 counter
        for (name, bound) in [("increments", self.increments), ("decrements", self.decrements)] {
            if bound >= i64::MAX as u64 {
                return Err(eyre!("{} must be below {}, got {}", name, i64::MAX, bound));
            }
        }
        if self.coordinator.channel_capacity == 0 || self.coordinator.completion_capacity == 0 {
            return Err(eyre!("coordinator channel capacities must be at least 1"));
        }
        Ok(())
    }

    /// The experiment this config describes
    pub fn experiment(&self) -> ExperimentConfig {
        ExperimentConfig {
            strategy: self.strategy,
            increments: self.increments,
            decrements: self.decrements,
            coordinator: self.coordinator.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.strategy, Strategy::Channel);
        assert_eq!(config.workers, 2);
        assert_eq!(config.increments, 1_000_000);
        assert_eq!(config.decrements, 1_000_000);
        assert!(config.log_level.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mn.yml");
        std::fs::write(
            &path,
            "strategy: mutex\nworkers: 1\nincrements: 5\ndecrements: 3\ncoordinator:\n  channel-capacity: 16\n",
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.strategy, Strategy::Mutex);
        assert_eq!(config.workers, 1);
        assert_eq!(config.increments, 5);
        assert_eq!(config.decrements, 3);
        assert_eq!(config.coordinator.channel_capacity, 16);
        assert_eq!(config.coordinator.completion_capacity, 1);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.yml");
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_load_records_source_and_log_level() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mn.yml");
        std::fs::write(&path, "strategy: racy\nlog-level: debug\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.strategy, Strategy::Racy);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.source.as_deref(), Some(path.as_path()));
        assert!(Config::default().source.is_none());
    }

    #[test]
    fn test_env_override() {
        let mut config = Config::default();
        config
            .apply_env(|key| (key == WORKERS_ENV).then(|| "1".to_string()))
            .unwrap();
        assert_eq!(config.workers, 1);

        let mut config = Config::default();
        config.apply_env(|_| None).unwrap();
        assert_eq!(config.workers, 2);

        let mut config = Config::default();
        assert!(config.apply_env(|_| Some("many".to_string())).is_err());
    }

    #[test]
    fn test_validate_rejects_zero() {
        let config = Config {
            workers: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            coordinator: CoordinatorConfig::with_capacity(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bounds_that_overflow_the_counter() {
        let config = Config {
            increments: u64::MAX,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            decrements: i64::MAX as u64,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            increments: i64::MAX as u64 - 1,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_experiment_mirrors_config() {
        let config = Config {
            increments: 5,
            decrements: 3,
            ..Default::default()
        };
        let experiment = config.experiment();
        assert_eq!(experiment.increments, 5);
        assert_eq!(experiment.decrements, 3);
        assert_eq!(experiment.expected(), 2);
    }
}
