// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::config::Config;
use crate::prime_counter::PrimeCounter;
use parallel_blocks_core::timing::millis;
use parallel_blocks_core::{
    partition_range, Dispatch, Dispatcher, Error, ExecutionStrategy, Result, TimingLog,
    TimingRecord,
};
use std::fmt;
use std::io::Write;
use std::time::Instant;
use tracing::{debug, info};

/// Split `0..limit` into `workers` blocks and count the primes of each block
/// on its own worker.
pub fn count_primes_below<S: ExecutionStrategy>(
    dispatcher: &Dispatcher<S>,
    limit: usize,
    workers: usize,
) -> Result<Dispatch<u64>> {
    let blocks = partition_range(limit, workers)?;
    dispatcher.run::<PrimeCounter>(blocks)
}

#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkSummary {
    pub strategy: &'static str,
    pub workers: usize,
    pub limit: usize,
    pub primes: u64,
    pub runs: usize,
    pub average_execution_ms: f64,
    pub average_total_ms: f64,
}

impl BenchmarkSummary {
    pub fn timing(&self) -> TimingRecord {
        TimingRecord {
            workers: self.workers,
            execution_ms: self.average_execution_ms,
            total_ms: self.average_total_ms,
        }
    }
}

impl fmt::Display for BenchmarkSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Found {} primes below {} with {} {} workers.",
            self.primes, self.limit, self.workers, self.strategy
        )?;
        writeln!(
            f,
            "The execution step took {:.3} milliseconds on average over {} runs.",
            self.average_execution_ms, self.runs
        )?;
        write!(
            f,
            "The total time was {:.3} milliseconds on average",
            self.average_total_ms
        )
    }
}

/// Repeat the prime count `runs` times and average the timings.
///
/// Every run must agree on the number of primes.
pub fn benchmark<S: ExecutionStrategy>(
    dispatcher: &Dispatcher<S>,
    limit: usize,
    workers: usize,
    runs: usize,
) -> Result<BenchmarkSummary> {
    if runs == 0 {
        return Err(Error::invalid_argument("runs must be at least 1"));
    }

    let mut primes = None;
    let mut execution_ms = 0.0;
    let mut total_ms = 0.0;

    for run in 0..runs {
        let start = Instant::now();
        let dispatch = count_primes_below(dispatcher, limit, workers)?;
        let found = dispatch.total()?;
        let elapsed = millis(start.elapsed());
        debug!(
            run,
            primes = found,
            execution_ms = dispatch.elapsed_ms(),
            total_ms = elapsed,
            "run finished"
        );

        match primes {
            Some(previous) if previous != found => {
                return Err(Error::invalid_argument(format!(
                    "runs disagree on the prime count: {previous} then {found}"
                )));
            }
            _ => primes = Some(found),
        }
        execution_ms += dispatch.elapsed_ms();
        total_ms += elapsed;
    }

    Ok(BenchmarkSummary {
        strategy: dispatcher.strategy().name(),
        workers,
        limit,
        primes: primes.unwrap_or_default(),
        runs,
        average_execution_ms: execution_ms / runs as f64,
        average_total_ms: total_ms / runs as f64,
    })
}

/// Benchmark every selected strategy, writing a section per strategy to `out`
pub fn run(config: &Config, out: &mut impl Write) -> Result<Vec<BenchmarkSummary>> {
    let write_err = |e: std::io::Error| Error::io("failed to write report", e);
    let timing_log = config.timing_log.as_ref().map(TimingLog::new);
    let mut summaries = Vec::new();

    for kind in config.strategy.kinds() {
        info!(
            strategy = ?kind,
            workers = config.workers,
            limit = config.limit,
            runs = config.runs,
            "benchmark started"
        );
        writeln!(out, "--{}--", kind.label()).map_err(write_err)?;

        let dispatcher = Dispatcher::new(kind.build(config.verbosity)?);
        let summary = benchmark(&dispatcher, config.limit, config.workers, config.runs)?;
        writeln!(out, "{summary}").map_err(write_err)?;

        if let Some(log) = &timing_log {
            log.append(&summary.timing())?;
        }
        summaries.push(summary);
    }

    Ok(summaries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StrategySelection;
    use parallel_blocks_core::{InlineStrategy, TaskStrategy, ThreadStrategy};

    #[test]
    fn test_scaling_invariance() {
        let dispatcher = Dispatcher::new(ThreadStrategy);
        for workers in [1, 10, 100] {
            let dispatch = count_primes_below(&dispatcher, 10_000, workers).unwrap();
            assert_eq!(dispatch.total().unwrap(), 1229, "{workers} workers");
            assert_eq!(dispatch.results.len(), workers);
        }
    }

    #[test]
    fn test_more_workers_than_numbers() {
        let dispatcher = Dispatcher::new(InlineStrategy);
        let dispatch = count_primes_below(&dispatcher, 10, 25).unwrap();
        assert_eq!(dispatch.total().unwrap(), 4);
    }

    #[test]
    fn test_benchmark_averages_runs() {
        let dispatcher = Dispatcher::new(TaskStrategy::new().unwrap());
        let summary = benchmark(&dispatcher, 100, 4, 3).unwrap();
        assert_eq!(summary.primes, 25);
        assert_eq!(summary.runs, 3);
        assert_eq!(summary.strategy, "task");
        assert!(summary.average_execution_ms <= summary.average_total_ms);
    }

    #[test]
    fn test_benchmark_rejects_zero_runs() {
        let dispatcher = Dispatcher::new(InlineStrategy);
        assert!(benchmark(&dispatcher, 100, 4, 0).is_err());
    }

    #[test]
    fn test_run_writes_section_per_strategy() {
        let config = Config {
            workers: 3,
            limit: 100,
            runs: 1,
            strategy: StrategySelection::Inline,
            timing_log: None,
            verbosity: 0,
        };
        let mut out = Vec::new();
        let summaries = run(&config, &mut out).unwrap();
        assert_eq!(summaries.len(), 1);

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("--SINGLE PROCESS RUN--"));
        assert!(text.contains("Found 25 primes below 100 with 3 inline workers."));
    }
}
