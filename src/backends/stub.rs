// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::collections::HashMap;

use crate::task::{ProcessResult, TaskContext};
use crate::traits::{BroadcastProcessor, MapReduceProcessor, Processor};

/// A stub processor that succeeds in every phase, for wiring and placeholder use.
///
/// It implements every capability, so any task position can be exercised with it.
pub struct StubProcessor {
    pub id: String,
}

impl StubProcessor {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}

#[async_trait]
impl Processor for StubProcessor {
    async fn process(&self, _ctx: &mut TaskContext) -> anyhow::Result<ProcessResult> {
        Ok(ProcessResult::success(format!("{} processed", self.id)))
    }

    fn name(&self) -> &'static str {
        "stub"
    }

    fn as_broadcast(&self) -> Option<&dyn BroadcastProcessor> {
        Some(self)
    }

    fn as_map_reduce(&self) -> Option<&dyn MapReduceProcessor> {
        Some(self)
    }
}

#[async_trait]
impl BroadcastProcessor for StubProcessor {
    async fn pre_process(&self, _ctx: &mut TaskContext) -> anyhow::Result<ProcessResult> {
        Ok(ProcessResult::success(format!("{} prepared", self.id)))
    }

    async fn post_process(
        &self,
        _ctx: &mut TaskContext,
        task_results: HashMap<String, String>,
    ) -> anyhow::Result<ProcessResult> {
        Ok(ProcessResult::success(format!("{} results", task_results.len())))
    }
}

#[async_trait]
impl MapReduceProcessor for StubProcessor {
    async fn reduce(
        &self,
        _ctx: &mut TaskContext,
        task_results: HashMap<String, String>,
    ) -> anyhow::Result<ProcessResult> {
        Ok(ProcessResult::success(format!("{} results", task_results.len())))
    }
}

/// A processor that always fails for testing failure scenarios
pub struct FailingProcessor {
    pub id: String,
}

impl FailingProcessor {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}

#[async_trait]
impl Processor for FailingProcessor {
    async fn process(&self, _ctx: &mut TaskContext) -> anyhow::Result<ProcessResult> {
        anyhow::bail!("Simulated processor failure")
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

/// A processor that panics for testing panic isolation
pub struct PanickingProcessor {
    pub id: String,
}

impl PanickingProcessor {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}

#[async_trait]
impl Processor for PanickingProcessor {
    async fn process(&self, _ctx: &mut TaskContext) -> anyhow::Result<ProcessResult> {
        panic!("processor {} blew up", self.id)
    }

    fn name(&self) -> &'static str {
        "panicking"
    }
}
