// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::block_task::BlockTask;
use crate::error::{Error, Result};
use crate::execution_strategy::ExecutionStrategy;
use tokio::runtime::{Builder, Runtime};
use tokio::task::JoinHandle;

/// Tokio task-based strategy
/// Blocks run on the runtime's blocking pool since the work is CPU bound
pub struct TaskStrategy {
    runtime: Runtime,
}

impl TaskStrategy {
    pub fn new() -> Result<Self> {
        let runtime = Builder::new_multi_thread()
            .thread_name("block-task")
            .enable_all()
            .build()
            .map_err(|e| Error::io("failed to build tokio runtime", e))?;
        Ok(Self { runtime })
    }
}

impl ExecutionStrategy for TaskStrategy {
    type Handle<O: Send + 'static> = JoinHandle<O>;

    fn name(&self) -> &'static str {
        "task"
    }

    fn spawn<T: BlockTask>(
        &self,
        worker_id: usize,
        input: T::Input,
    ) -> Result<Self::Handle<T::Output>> {
        Ok(self
            .runtime
            .spawn_blocking(move || T::run(worker_id, &input)))
    }

    fn join<T: BlockTask>(
        &self,
        worker_id: usize,
        handle: Self::Handle<T::Output>,
    ) -> Result<T::Output> {
        self.runtime
            .block_on(handle)
            .map_err(|_| Error::WorkerPanicked { worker_id })
    }
}
