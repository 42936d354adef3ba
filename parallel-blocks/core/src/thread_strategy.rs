// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::block_task::BlockTask;
use crate::error::{Error, Result};
use crate::execution_strategy::ExecutionStrategy;
use std::thread::{self, JoinHandle};

/// One OS thread per block
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadStrategy;

impl ExecutionStrategy for ThreadStrategy {
    type Handle<O: Send + 'static> = JoinHandle<O>;

    fn name(&self) -> &'static str {
        "thread"
    }

    fn spawn<T: BlockTask>(
        &self,
        worker_id: usize,
        input: T::Input,
    ) -> Result<Self::Handle<T::Output>> {
        thread::Builder::new()
            .name(format!("{}-worker-{}", T::NAME, worker_id))
            .spawn(move || T::run(worker_id, &input))
            .map_err(|source| Error::Spawn { worker_id, source })
    }

    fn join<T: BlockTask>(
        &self,
        worker_id: usize,
        handle: Self::Handle<T::Output>,
    ) -> Result<T::Output> {
        handle
            .join()
            .map_err(|_| Error::WorkerPanicked { worker_id })
    }
}
