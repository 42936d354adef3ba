// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod error;
pub use error::{Error, Result};

mod block;
pub use block::Block;

pub mod partitioner;
pub use partitioner::{partition_range, partition_text, DEFAULT_DELIMITER};

mod block_task;
pub use block_task::BlockTask;

mod execution_strategy;
pub use execution_strategy::ExecutionStrategy;

mod thread_strategy;
pub use thread_strategy::ThreadStrategy;

mod task_strategy;
pub use task_strategy::TaskStrategy;

mod process_strategy;
pub use process_strategy::{ProcessHandle, ProcessStrategy, WORKER_FLAG};

mod inline_strategy;
pub use inline_strategy::InlineStrategy;

mod strategy_kind;
pub use strategy_kind::{AnyHandle, AnyStrategy, StrategyKind};

pub mod worker_message;
pub use worker_message::{WorkRequest, WorkerReply};

pub mod process_worker;

mod result_slots;
pub use result_slots::ResultSlots;

mod dispatcher;
pub use dispatcher::{Dispatch, Dispatcher};

pub mod timing;
pub use timing::{TimingLog, TimingRecord};

pub mod telemetry;

pub mod utils;
