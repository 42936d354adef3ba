// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::block_task::BlockTask;
use crate::error::{Error, Result};
use crate::execution_strategy::ExecutionStrategy;
use std::panic::{self, AssertUnwindSafe};
use std::thread;

/// Single-process baseline: every block runs on the calling thread, one after
/// the other, inside `spawn`. A panicking block is caught there and reported
/// on join, so the blocks after it still run.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineStrategy;

impl ExecutionStrategy for InlineStrategy {
    type Handle<O: Send + 'static> = thread::Result<O>;

    fn name(&self) -> &'static str {
        "inline"
    }

    fn spawn<T: BlockTask>(
        &self,
        worker_id: usize,
        input: T::Input,
    ) -> Result<Self::Handle<T::Output>> {
        Ok(panic::catch_unwind(AssertUnwindSafe(|| T::run(worker_id, &input))))
    }

    fn join<T: BlockTask>(
        &self,
        worker_id: usize,
        handle: Self::Handle<T::Output>,
    ) -> Result<T::Output> {
        handle.map_err(|_| Error::WorkerPanicked { worker_id })
    }
}
