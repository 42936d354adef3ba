// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error type shared by the partitioner, the dispatcher and every execution
//! strategy.
//!
//! Three families of failures exist and none of them is recovered from:
//! - I/O failures (input file, config file, timing log)
//! - input validation (worker count, malformed arguments)
//! - worker failures (panic, abnormal child exit, unreadable reply)

use std::process::ExitStatus;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Reading or writing a file failed.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// A run was requested with zero workers.
    #[error("worker count must be at least 1")]
    InvalidWorkerCount,

    /// A command-line or config value is out of range or malformed.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// A thread or task worker panicked before producing its result.
    #[error("worker {worker_id} panicked")]
    WorkerPanicked { worker_id: usize },

    /// The unit of execution could not be created.
    #[error("failed to spawn worker {worker_id}: {source}")]
    Spawn {
        worker_id: usize,
        #[source]
        source: std::io::Error,
    },

    /// A worker process terminated with a non-success status.
    #[error("worker {worker_id} exited with {status}")]
    WorkerExited { worker_id: usize, status: ExitStatus },

    /// A worker process reported that it could not run its block.
    #[error("worker {worker_id} failed: {reason}")]
    WorkerFailed { worker_id: usize, reason: String },

    /// A request or reply on the worker process pipe could not be encoded or
    /// decoded.
    #[error("malformed message for worker {worker_id}: {source}")]
    Protocol {
        worker_id: usize,
        #[source]
        source: serde_json::Error,
    },

    /// A worker process could not decode the request on its stdin.
    #[error("malformed work request: {source}")]
    MalformedRequest {
        #[source]
        source: serde_json::Error,
    },

    /// A worker process was asked to run a task it does not serve.
    #[error("worker serves task '{expected}' but was asked to run '{found}'")]
    TaskMismatch { expected: String, found: String },

    /// A result slot received a second write.
    #[error("result slot {worker_id} was already filled")]
    SlotAlreadyFilled { worker_id: usize },

    /// Aggregation found a slot that no worker filled.
    #[error("result slot {worker_id} is empty")]
    SlotMissing { worker_id: usize },
}

impl Error {
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            context: context.into(),
            source,
        }
    }

    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            reason: reason.into(),
        }
    }
}
