// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use serde::{Deserialize, Serialize};

/// Request written to a worker process on its stdin
#[derive(Serialize, Deserialize, Debug)]
pub struct WorkRequest<A> {
    /// Name of the task the worker must run
    pub task: String,
    pub worker_id: usize,
    pub assignment: A,
}

/// Reply written by a worker process on its stdout
#[derive(Serialize, Deserialize, Debug)]
pub enum WorkerReply<O> {
    /// The block was processed
    Completed(O),
    /// The worker refused or could not process the block
    Failed(String),
}
