// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::block_task::BlockTask;
use crate::error::{Error, Result};
use crate::execution_strategy::ExecutionStrategy;
use crate::worker_message::{WorkRequest, WorkerReply};
use std::ffi::OsString;
use std::io::{ErrorKind, Write};
use std::marker::PhantomData;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use tracing::debug;

/// Flag a binary recognises as "serve one block on stdin/stdout and exit"
pub const WORKER_FLAG: &str = "--worker";

/// One child OS process per block
///
/// The child is a fresh instance of `program`, started with `args`. It gets
/// its assignment as a JSON `WorkRequest` on stdin and answers with a JSON
/// `WorkerReply` on stdout. Its stderr is inherited so worker logs reach the
/// terminal.
#[derive(Debug, Clone)]
pub struct ProcessStrategy {
    program: PathBuf,
    args: Vec<OsString>,
}

impl ProcessStrategy {
    /// Workers are started as `program --worker`
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self::with_args(program, [WORKER_FLAG])
    }

    pub fn with_args<I, S>(program: impl Into<PathBuf>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Passes `-v` to every worker `verbosity` times
    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.args.extend((0..verbosity).map(|_| OsString::from("-v")));
        self
    }

    /// Workers are started by re-executing the running binary
    pub fn current_exe() -> Result<Self> {
        let program = std::env::current_exe()
            .map_err(|e| Error::io("failed to locate the running executable", e))?;
        Ok(Self::new(program))
    }
}

/// A running worker process
pub struct ProcessHandle<O> {
    child: Child,
    _output: PhantomData<fn() -> O>,
}

impl ExecutionStrategy for ProcessStrategy {
    type Handle<O: Send + 'static> = ProcessHandle<O>;

    fn name(&self) -> &'static str {
        "process"
    }

    fn spawn<T: BlockTask>(
        &self,
        worker_id: usize,
        input: T::Input,
    ) -> Result<Self::Handle<T::Output>> {
        let request = WorkRequest {
            task: T::NAME.to_string(),
            worker_id,
            assignment: input,
        };
        let payload =
            serde_json::to_vec(&request).map_err(|source| Error::Protocol { worker_id, source })?;

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| Error::Spawn { worker_id, source })?;
        debug!(worker_id, pid = child.id(), "worker process started");

        // Dropping stdin closes the pipe, which is how the child knows the
        // request is complete. A child that exits early surfaces through its
        // exit status on join.
        if let Some(mut stdin) = child.stdin.take() {
            match stdin.write_all(&payload) {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                    debug!(worker_id, "worker process closed its stdin early");
                }
                Err(source) => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(Error::Spawn { worker_id, source });
                }
            }
        }

        Ok(ProcessHandle {
            child,
            _output: PhantomData,
        })
    }

    fn join<T: BlockTask>(
        &self,
        worker_id: usize,
        handle: Self::Handle<T::Output>,
    ) -> Result<T::Output> {
        let output = handle
            .child
            .wait_with_output()
            .map_err(|e| Error::io(format!("failed to wait for worker {worker_id}"), e))?;

        let reply = serde_json::from_slice::<WorkerReply<T::Output>>(&output.stdout);
        match (reply, output.status.success()) {
            (Ok(WorkerReply::Failed(reason)), _) => Err(Error::WorkerFailed { worker_id, reason }),
            (Ok(WorkerReply::Completed(result)), true) => Ok(result),
            (_, false) => Err(Error::WorkerExited {
                worker_id,
                status: output.status,
            }),
            (Err(source), true) => Err(Error::Protocol { worker_id, source }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workers_inherit_verbosity() {
        let strategy = ProcessStrategy::new("primes").with_verbosity(2);
        let expected: Vec<OsString> = ["--worker", "-v", "-v"].map(OsString::from).to_vec();
        assert_eq!(strategy.args, expected);

        let quiet = ProcessStrategy::new("primes").with_verbosity(0);
        assert_eq!(quiet.args, vec![OsString::from(WORKER_FLAG)]);
    }
}
