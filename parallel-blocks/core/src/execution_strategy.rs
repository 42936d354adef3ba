// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::block_task::BlockTask;
use crate::error::Result;

/// Trait for abstracting the unit of execution (threads, tasks, processes)
/// Every implementation honours the same contract:
/// - `spawn` starts the block eagerly and returns without waiting for it
/// - `join` blocks until that unit has finished and hands back its result
pub trait ExecutionStrategy {
    /// Handle to a running unit of execution producing `O`
    type Handle<O: Send + 'static>;

    /// Short name used in logs and reports
    fn name(&self) -> &'static str;

    /// Start processing one block
    fn spawn<T: BlockTask>(
        &self,
        worker_id: usize,
        input: T::Input,
    ) -> Result<Self::Handle<T::Output>>;

    /// Wait for the unit to complete
    fn join<T: BlockTask>(
        &self,
        worker_id: usize,
        handle: Self::Handle<T::Output>,
    ) -> Result<T::Output>;
}
