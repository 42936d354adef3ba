// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::block_task::BlockTask;
use crate::error::{Error, Result};
use crate::execution_strategy::ExecutionStrategy;
use crate::result_slots::ResultSlots;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// Results of one dispatch, available only once every worker has been joined
#[derive(Debug, Clone)]
pub struct Dispatch<O> {
    pub results: ResultSlots<O>,
    /// Wall time from the first spawn to the last join
    pub elapsed: Duration,
}

impl<O: Default + std::ops::AddAssign + Clone> Dispatch<O> {
    pub fn total(&self) -> Result<O> {
        self.results.aggregate()
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Dispatcher runs one unit of execution per block and aggregates after the
/// join barrier
/// Generic over the execution strategy
pub struct Dispatcher<S: ExecutionStrategy> {
    strategy: S,
}

impl<S: ExecutionStrategy> Dispatcher<S> {
    pub fn new(strategy: S) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Runs `T` over every input, one worker per input, worker id = position
    ///
    /// All workers are started before any is joined. When a worker fails the
    /// remaining ones still run to completion and are joined, then the first
    /// failure is returned.
    pub fn run<T: BlockTask>(&self, inputs: Vec<T::Input>) -> Result<Dispatch<T::Output>> {
        let num_workers = inputs.len();
        if num_workers == 0 {
            return Err(Error::InvalidWorkerCount);
        }

        info!(
            task = T::NAME,
            strategy = self.strategy.name(),
            workers = num_workers,
            "starting execution"
        );
        let start = Instant::now();

        let mut first_error = None;
        let mut handles = Vec::with_capacity(num_workers);
        for (worker_id, input) in inputs.into_iter().enumerate() {
            match self.strategy.spawn::<T>(worker_id, input) {
                Ok(handle) => handles.push((worker_id, handle)),
                Err(e) => {
                    error!(worker_id, error = %e, "failed to start worker");
                    first_error = Some(e);
                    break;
                }
            }
        }

        let mut results = ResultSlots::new(num_workers);
        for (worker_id, handle) in handles {
            let outcome = self
                .strategy
                .join::<T>(worker_id, handle)
                .and_then(|output| {
                    debug!(worker_id, result = ?output, "worker finished");
                    results.fill(worker_id, output)
                });
            if let Err(e) = outcome {
                error!(worker_id, error = %e, "worker failed");
                first_error.get_or_insert(e);
            }
        }

        if let Some(e) = first_error {
            return Err(e);
        }

        let elapsed = start.elapsed();
        info!(
            task = T::NAME,
            strategy = self.strategy.name(),
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            "execution finished"
        );

        Ok(Dispatch { results, elapsed })
    }
}
