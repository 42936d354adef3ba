// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Child side of [`ProcessStrategy`](crate::ProcessStrategy).

use crate::block_task::BlockTask;
use crate::error::{Error, Result};
use crate::worker_message::{WorkRequest, WorkerReply};
use std::io::{Read, Write};
use std::time::Instant;
use tracing::info;

/// Reads one request from `reader`, runs it and writes the reply to `writer`.
///
/// A request for another task is answered with `WorkerReply::Failed` and
/// reported as [`Error::TaskMismatch`].
pub fn serve<T, R, W>(reader: R, mut writer: W) -> Result<()>
where
    T: BlockTask,
    R: Read,
    W: Write,
{
    let request: WorkRequest<T::Input> =
        serde_json::from_reader(reader).map_err(|source| Error::MalformedRequest { source })?;
    let worker_id = request.worker_id;

    if request.task != T::NAME {
        let reason = format!("this worker only runs '{}'", T::NAME);
        write_reply::<T::Output, _>(&mut writer, worker_id, &WorkerReply::Failed(reason))?;
        return Err(Error::TaskMismatch {
            expected: T::NAME.to_string(),
            found: request.task,
        });
    }

    let start = Instant::now();
    let output = T::run(worker_id, &request.assignment);
    info!(
        worker_id,
        pid = std::process::id(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "worker process finished its block"
    );

    write_reply(&mut writer, worker_id, &WorkerReply::Completed(output))
}

/// Serves a single request on the process's own stdin and stdout
pub fn serve_stdio<T: BlockTask>() -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    serve::<T, _, _>(stdin.lock(), stdout.lock())
}

fn write_reply<O, W>(writer: &mut W, worker_id: usize, reply: &WorkerReply<O>) -> Result<()>
where
    O: serde::Serialize,
    W: Write,
{
    serde_json::to_writer(&mut *writer, reply)
        .map_err(|source| Error::Protocol { worker_id, source })?;
    writer
        .flush()
        .map_err(|e| Error::io("failed to flush worker reply", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Doubler;

    impl BlockTask for Doubler {
        const NAME: &'static str = "doubler";
        type Input = u64;
        type Output = u64;

        fn run(_worker_id: usize, input: &u64) -> u64 {
            input * 2
        }
    }

    fn request(task: &str, worker_id: usize, assignment: u64) -> Vec<u8> {
        serde_json::to_vec(&WorkRequest {
            task: task.to_string(),
            worker_id,
            assignment,
        })
        .unwrap()
    }

    #[test]
    fn test_serve_answers_with_completed_reply() {
        let input = request("doubler", 4, 21);
        let mut out = Vec::new();
        serve::<Doubler, _, _>(input.as_slice(), &mut out).unwrap();

        let reply: WorkerReply<u64> = serde_json::from_slice(&out).unwrap();
        assert!(matches!(reply, WorkerReply::Completed(42)));
    }

    #[test]
    fn test_serve_rejects_other_task() {
        let input = request("primes", 0, 1);
        let mut out = Vec::new();
        let err = serve::<Doubler, _, _>(input.as_slice(), &mut out).unwrap_err();
        assert!(matches!(err, Error::TaskMismatch { .. }));

        let reply: WorkerReply<u64> = serde_json::from_slice(&out).unwrap();
        assert!(matches!(reply, WorkerReply::Failed(_)));
    }

    #[test]
    fn test_serve_rejects_garbage() {
        let mut out = Vec::new();
        let err = serve::<Doubler, _, _>(&b"not json"[..], &mut out).unwrap_err();
        assert!(matches!(err, Error::MalformedRequest { .. }));
        assert!(out.is_empty());
    }
}
