// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::block_task::BlockTask;
use crate::error::{Error, Result};
use crate::execution_strategy::ExecutionStrategy;
use crate::inline_strategy::InlineStrategy;
use crate::process_strategy::{ProcessHandle, ProcessStrategy};
use crate::task_strategy::TaskStrategy;
use crate::thread_strategy::ThreadStrategy;
use serde::{Deserialize, Serialize};

/// Execution strategy selectable from the command line or a config file
#[derive(clap::ValueEnum, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// One OS thread per block
    Thread,
    /// One child process per block
    Process,
    /// One tokio blocking task per block
    Task,
    /// Every block on the calling thread
    Inline,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 4] = [
        StrategyKind::Inline,
        StrategyKind::Process,
        StrategyKind::Thread,
        StrategyKind::Task,
    ];

    /// Instantiate the strategy; worker processes re-execute the running binary
    /// with the caller's log verbosity
    pub fn build(self, verbosity: u8) -> Result<AnyStrategy> {
        Ok(match self {
            StrategyKind::Thread => AnyStrategy::Thread(ThreadStrategy),
            StrategyKind::Process => {
                AnyStrategy::Process(ProcessStrategy::current_exe()?.with_verbosity(verbosity))
            }
            StrategyKind::Task => AnyStrategy::Task(TaskStrategy::new()?),
            StrategyKind::Inline => AnyStrategy::Inline(InlineStrategy),
        })
    }

    pub fn label(self) -> &'static str {
        match self {
            StrategyKind::Thread => "MANY THREADS RUN",
            StrategyKind::Process => "MANY PROCESSES RUN",
            StrategyKind::Task => "MANY TASKS RUN",
            StrategyKind::Inline => "SINGLE PROCESS RUN",
        }
    }
}

/// Strategy chosen at runtime
pub enum AnyStrategy {
    Thread(ThreadStrategy),
    Process(ProcessStrategy),
    Task(TaskStrategy),
    Inline(InlineStrategy),
}

pub enum AnyHandle<O: Send + 'static> {
    Thread(<ThreadStrategy as ExecutionStrategy>::Handle<O>),
    Process(ProcessHandle<O>),
    Task(<TaskStrategy as ExecutionStrategy>::Handle<O>),
    Inline(<InlineStrategy as ExecutionStrategy>::Handle<O>),
}

impl ExecutionStrategy for AnyStrategy {
    type Handle<O: Send + 'static> = AnyHandle<O>;

    fn name(&self) -> &'static str {
        match self {
            AnyStrategy::Thread(s) => s.name(),
            AnyStrategy::Process(s) => s.name(),
            AnyStrategy::Task(s) => s.name(),
            AnyStrategy::Inline(s) => s.name(),
        }
    }

    fn spawn<T: BlockTask>(
        &self,
        worker_id: usize,
        input: T::Input,
    ) -> Result<Self::Handle<T::Output>> {
        Ok(match self {
            AnyStrategy::Thread(s) => AnyHandle::Thread(s.spawn::<T>(worker_id, input)?),
            AnyStrategy::Process(s) => AnyHandle::Process(s.spawn::<T>(worker_id, input)?),
            AnyStrategy::Task(s) => AnyHandle::Task(s.spawn::<T>(worker_id, input)?),
            AnyStrategy::Inline(s) => AnyHandle::Inline(s.spawn::<T>(worker_id, input)?),
        })
    }

    fn join<T: BlockTask>(
        &self,
        worker_id: usize,
        handle: Self::Handle<T::Output>,
    ) -> Result<T::Output> {
        match (self, handle) {
            (AnyStrategy::Thread(s), AnyHandle::Thread(h)) => s.join::<T>(worker_id, h),
            (AnyStrategy::Process(s), AnyHandle::Process(h)) => s.join::<T>(worker_id, h),
            (AnyStrategy::Task(s), AnyHandle::Task(h)) => s.join::<T>(worker_id, h),
            (AnyStrategy::Inline(s), AnyHandle::Inline(h)) => s.join::<T>(worker_id, h),
            _ => Err(Error::WorkerFailed {
                worker_id,
                reason: format!("handle was not created by the {} strategy", self.name()),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Dispatcher;

    struct Len;

    impl BlockTask for Len {
        const NAME: &'static str = "len";
        type Input = String;
        type Output = usize;

        fn run(_worker_id: usize, input: &String) -> usize {
            input.len()
        }
    }

    #[test]
    fn test_kind_parses_from_config() {
        let kind: StrategyKind = serde_json::from_str("\"process\"").unwrap();
        assert_eq!(kind, StrategyKind::Process);
        assert!(serde_json::from_str::<StrategyKind>("\"fork\"").is_err());
    }

    #[test]
    fn test_any_strategy_delegates() {
        for kind in [StrategyKind::Thread, StrategyKind::Task, StrategyKind::Inline] {
            let dispatcher = Dispatcher::new(kind.build(0).unwrap());
            let inputs = vec!["ab".to_string(), "cde".to_string(), String::new()];
            let dispatch = dispatcher.run::<Len>(inputs).unwrap();
            assert_eq!(dispatch.total().unwrap(), 5, "strategy {kind:?}");
        }
    }

    #[test]
    fn test_build_names_match_kind() {
        assert_eq!(StrategyKind::Thread.build(0).unwrap().name(), "thread");
        assert_eq!(StrategyKind::Inline.build(0).unwrap().name(), "inline");
        assert_eq!(StrategyKind::Task.build(0).unwrap().name(), "task");
    }
}
