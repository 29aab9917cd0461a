// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use crate::task::{ProcessResult, TaskContext};

/// A pluggable processing strategy resolved from a task assignment.
///
/// Every processor can handle an ordinary task through [`Processor::process`].
/// Processors that take part in broadcast or map-reduce instances expose the
/// extra capability through `as_broadcast` / `as_map_reduce`; the engine asks
/// for the capability it needs and fails the task with an explicit error when
/// it is absent.
///
/// Errors returned from any capability method are turned into a failed
/// `ProcessResult` carrying the error's text.
#[async_trait]
pub trait Processor: Send + Sync {
    async fn process(&self, ctx: &mut TaskContext) -> anyhow::Result<ProcessResult>;

    fn name(&self) -> &'static str;

    fn as_broadcast(&self) -> Option<&dyn BroadcastProcessor> {
        None
    }

    fn as_map_reduce(&self) -> Option<&dyn MapReduceProcessor> {
        None
    }
}

/// Broadcast capability: a pre-execute phase run once by the root task before
/// fan-out, and a post-execute phase run by the last task over every result.
#[async_trait]
pub trait BroadcastProcessor: Processor {
    async fn pre_process(&self, ctx: &mut TaskContext) -> anyhow::Result<ProcessResult>;

    /// `task_results` maps sub-task id to that task's result message
    async fn post_process(
        &self,
        ctx: &mut TaskContext,
        task_results: HashMap<String, String>,
    ) -> anyhow::Result<ProcessResult>;
}

/// Map-reduce capability. The map phase happens inside `process` through
/// `TaskContext::map`; the last task reduces every sub-task result.
#[async_trait]
pub trait MapReduceProcessor: Processor {
    async fn reduce(
        &self,
        ctx: &mut TaskContext,
        task_results: HashMap<String, String>,
    ) -> anyhow::Result<ProcessResult>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Broadcast,
    MapReduce,
}

impl Display for Capability {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Capability::Broadcast => f.write_str("broadcast"),
            Capability::MapReduce => f.write_str("map-reduce"),
        }
    }
}
