// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::collections::HashMap;

use crate::task::{ProcessResult, TaskContext};
use crate::traits::{BroadcastProcessor, Processor};

/// Host Probe processor - broadcast that has every worker node report its host name
pub struct HostProbeProcessor {
    hostname: String,
}

impl HostProbeProcessor {
    pub fn new() -> Self {
        let hostname = std::env::var("HOSTNAME").unwrap_or_else(|_| "localhost".to_string());
        Self::with_hostname(hostname)
    }

    pub fn with_hostname(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
        }
    }
}

#[async_trait]
impl Processor for HostProbeProcessor {
    async fn process(&self, _ctx: &mut TaskContext) -> anyhow::Result<ProcessResult> {
        Ok(ProcessResult::success(self.hostname.clone()))
    }

    fn name(&self) -> &'static str {
        "host_probe"
    }

    fn as_broadcast(&self) -> Option<&dyn BroadcastProcessor> {
        Some(self)
    }
}

#[async_trait]
impl BroadcastProcessor for HostProbeProcessor {
    async fn pre_process(&self, ctx: &mut TaskContext) -> anyhow::Result<ProcessResult> {
        Ok(ProcessResult::success(format!(
            "probe of instance {} prepared on {}",
            ctx.instance_id, self.hostname
        )))
    }

    async fn post_process(
        &self,
        _ctx: &mut TaskContext,
        task_results: HashMap<String, String>,
    ) -> anyhow::Result<ProcessResult> {
        let mut hosts: Vec<&str> = task_results.values().map(String::as_str).collect();
        hosts.sort_unstable();
        hosts.dedup();
        Ok(ProcessResult::success(format!(
            "{} nodes reported: {}",
            hosts.len(),
            hosts.join(",")
        )))
    }
}
