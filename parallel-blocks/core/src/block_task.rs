// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;
use std::ops::AddAssign;

/// Trait that defines the work done on a single block
/// Abstracts the problem domain from the execution strategy
pub trait BlockTask: Send + 'static {
    /// Name used to route a request to the right task in a worker process
    const NAME: &'static str;

    /// Everything a worker needs to process its block
    /// Serializable so that it can cross a process boundary
    type Input: Serialize + DeserializeOwned + Send + 'static;

    /// Per-block result, summed into the aggregate after the join barrier
    type Output: Serialize
        + DeserializeOwned
        + Default
        + AddAssign
        + Clone
        + Debug
        + Send
        + 'static;

    /// Process one block
    /// Must not touch any state shared with other workers
    fn run(worker_id: usize, input: &Self::Input) -> Self::Output;
}
