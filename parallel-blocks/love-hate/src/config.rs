// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use clap::{ArgAction, Parser, Subcommand};
use parallel_blocks_core::{Error, Result, StrategyKind};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Count the words "love" and "hate" in a text file, one block per worker.
#[derive(Parser, Debug)]
#[command(name = "love-hate", version, args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Number of workers; the file is split into this many blocks
    pub workers: Option<usize>,

    /// Text file to scan
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// How each block is executed
    #[arg(long, value_enum)]
    pub strategy: Option<StrategyKind>,

    /// File receiving one `workers execution_ms total_ms` line per run
    #[arg(long)]
    pub timing_log: Option<PathBuf>,

    /// Do not append to any timing log
    #[arg(long, conflicts_with = "timing_log")]
    pub no_timing_log: bool,

    /// ASCII character block boundaries are snapped to
    #[arg(long)]
    pub delimiter: Option<char>,

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

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Build a benchmark corpus by repeating (and lowercasing) a source text
    Prepare {
        /// Text to repeat
        #[arg(long)]
        source: PathBuf,

        /// Where to write the corpus
        #[arg(long)]
        output: PathBuf,

        /// Number of copies
        #[arg(long, default_value_t = 300)]
        repeat: usize,

        /// Keep the original letter case
        #[arg(long)]
        keep_case: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub workers: usize,
    pub input: PathBuf,
    pub strategy: StrategyKind,
    pub timing_log: Option<PathBuf>,
    pub delimiter: char,
    /// `-v` count, handed on to worker processes
    #[serde(skip)]
    pub verbosity: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workers: 5,
            input: PathBuf::from("./data/shakespeare.txt"),
            strategy: StrategyKind::Thread,
            timing_log: Some(PathBuf::from("time.txt")),
            delimiter: ' ',
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
        if let Some(input) = &cli.input {
            config.input = input.clone();
        }
        if let Some(strategy) = cli.strategy {
            config.strategy = strategy;
        }
        if let Some(timing_log) = &cli.timing_log {
            config.timing_log = Some(timing_log.clone());
        }
        if cli.no_timing_log {
            config.timing_log = None;
        }
        if let Some(delimiter) = cli.delimiter {
            config.delimiter = delimiter;
        }
        config.verbosity = cli.verbose;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(Error::InvalidWorkerCount);
        }
        if !self.delimiter.is_ascii() {
            return Err(Error::invalid_argument(format!(
                "delimiter '{}' is not an ASCII character",
                self.delimiter
            )));
        }
        Ok(())
    }

    pub fn delimiter_byte(&self) -> u8 {
        self.delimiter as u8
    }
}
