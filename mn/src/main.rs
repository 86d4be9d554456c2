//! MagicNumber - CLI entry point
//!
//! Runs the counter experiment once and prints the magic number.

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use tracing::{debug, info};

use magicnumber::cli::Cli;
use magicnumber::config::Config;
use magicnumber::{Experiment, Outcome, build_runtime};

fn setup_logging(level: Option<&str>) -> Result<()> {
    // Note: Can't log params here since logging isn't initialized yet
    let level = match level.map(|s| s.to_uppercase()) {
        Some(s) => match s.as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to WARN", s);
                tracing::Level::WARN
            }
        },
        None => tracing::Level::WARN,
    };

    // stdout carries only the result line
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .try_init()
        .map_err(|e| eyre::eyre!("Failed to install tracing subscriber: {}", e))?;

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

fn print_stats(outcome: &Outcome) {
    eprintln!("{}", "Run statistics".bold());
    eprintln!("  Strategy:     {}", outcome.strategy.to_string().cyan());
    if !outcome.strategy.is_deterministic() {
        eprintln!("  {}", "(racy: result varies between runs)".yellow());
    }
    eprintln!("  Workers:      {}", outcome.workers);
    eprintln!("  Threads used: {}", outcome.execution_contexts);
    eprintln!("  Expected:     {}", outcome.expected);
    eprintln!("  Elapsed:      {:?}", outcome.elapsed);
    if let Some(metrics) = &outcome.metrics {
        eprintln!("  Proposals:    {}", metrics.proposals_applied);
        eprintln!("    +1:         {}", metrics.increments_applied);
        eprintln!("    -1:         {}", metrics.decrements_applied);
        eprintln!("  Completions:  {}", metrics.completions_observed);
    }
    let lost = outcome.lost_updates();
    if lost == 0 {
        eprintln!("  Lost updates: {}", "0".green());
    } else {
        eprintln!("  Lost updates: {}", lost.to_string().red());
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    config
        .apply_env(|key| std::env::var(key).ok())
        .context("Failed to apply environment overrides")?;
    cli.apply(&mut config);
    config.validate().context("Invalid configuration")?;

    setup_logging(config.log_level.as_deref()).context("Failed to setup logging")?;
    if let Some(source) = &config.source {
        info!(path = %source.display(), "Loaded configuration file");
    }
    debug!(?config, "main: configuration resolved");

    let runtime = build_runtime(config.workers)?;
    let experiment = Experiment::new(config.experiment());
    let outcome = runtime.block_on(experiment.run()).context("Experiment failed")?;

    println!("{}", outcome.report_line());
    if cli.stats {
        print_stats(&outcome);
    }

    Ok(())
}
