// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use clap::{ArgAction, Parser, ValueEnum};
use parallel_blocks_core::{Error, Result, StrategyKind};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Count the primes below a bound with naive trial division, one block per
/// worker, and report the average time over several runs.
#[derive(Parser, Debug)]
#[command(name = "primes", version)]
pub struct Cli {
    /// Number of workers; the range is split into this many blocks
    pub workers: Option<usize>,

    /// Exclusive upper bound of the range scanned for primes
    #[arg(long)]
    pub limit: Option<usize>,

    /// Number of measured runs per strategy
    #[arg(long)]
    pub runs: Option<usize>,

    /// How each block is executed; `all` compares every strategy
    #[arg(long, value_enum)]
    pub strategy: Option<StrategySelection>,

    /// File receiving one `workers execution_ms total_ms` line per strategy
    #[arg(long)]
    pub timing_log: Option<PathBuf>,

    /// JSON file with default values for the options above
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Serve a single block on stdin/stdout (used by the process strategy)
    #[arg(long, hide = true)]
    pub worker: bool,
}

#[derive(ValueEnum, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StrategySelection {
    Thread,
    Process,
    Task,
    Inline,
    /// Every strategy in turn
    All,
}

impl StrategySelection {
    pub fn kinds(self) -> Vec<StrategyKind> {
        match self {
            StrategySelection::Thread => vec![StrategyKind::Thread],
            StrategySelection::Process => vec![StrategyKind::Process],
            StrategySelection::Task => vec![StrategyKind::Task],
            StrategySelection::Inline => vec![StrategyKind::Inline],
            StrategySelection::All => StrategyKind::ALL.to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub workers: usize,
    pub limit: usize,
    pub runs: usize,
    pub strategy: StrategySelection,
    pub timing_log: Option<PathBuf>,
    /// `-v` count, handed on to worker processes
    #[serde(skip)]
    pub verbosity: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workers: 100,
            limit: 100_000,
            runs: 10,
            strategy: StrategySelection::Thread,
            timing_log: None,
            verbosity: 0,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| Error::io(format!("failed to read config {}", path.display()), e))?;
        serde_json::from_str(&contents).map_err(|e| {
            Error::invalid_argument(format!("malformed config {}: {}", path.display(), e))
        })
    }

    /// Defaults, overridden by the config file, overridden by the command line
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(workers) = cli.workers {
            config.workers = workers;
        }
        if let Some(limit) = cli.limit {
            config.limit = limit;
        }
        if let Some(runs) = cli.runs {
            config.runs = runs;
        }
        if let Some(strategy) = cli.strategy {
            config.strategy = strategy;
        }
        if let Some(timing_log) = &cli.timing_log {
            config.timing_log = Some(timing_log.clone());
        }
        config.verbosity = cli.verbose;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(Error::InvalidWorkerCount);
        }
        if self.runs == 0 {
            return Err(Error::invalid_argument("runs must be at least 1"));
        }
        Ok(())
    }
}
