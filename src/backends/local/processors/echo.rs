// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use crate::task::{ProcessResult, TaskContext};
use crate::traits::Processor;

/// Echo processor - succeeds with the sub-task payload, or the job params when
/// there is no payload
pub struct EchoProcessor;

impl EchoProcessor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Processor for EchoProcessor {
    async fn process(&self, ctx: &mut TaskContext) -> anyhow::Result<ProcessResult> {
        let echoed = match ctx.sub_task() {
            Some(payload) => payload.to_string(),
            None => ctx.job_params.clone().unwrap_or_default(),
        };
        Ok(ProcessResult::success(echoed))
    }

    fn name(&self) -> &'static str {
        "echo"
    }
}
