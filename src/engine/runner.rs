// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Execution of a single task assignment.
//!
//! A [`ProcessorRunner`] walks one assignment through a fixed sequence:
//!
//! 1. announce `Processing` and build the [`TaskContext`]
//! 2. resolve the processor, failing the task with `NO_PROCESSOR` when none matches
//! 3. root task of a broadcast: run the pre-process phase and report it on its own channel
//! 4. last task: load the instance's results and run the fan-in phase
//! 5. anything else: run `process`
//!
//! Processor errors and panics never escape a runner; they become a failed
//! [`ProcessResult`]. Errors raised by the engine itself are logged as a defect
//! and still close the task: with `ProcessFailed`, or with an unsuccessful
//! pre-execute report for the root task of a broadcast.

use futures::FutureExt;
use std::collections::HashMap;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::time::Instant;
use tracing::Instrument;

use crate::engine::WorkerRuntime;
use crate::errors::WorkerError;
use crate::observability::messages::processor::{FanInNotSupported, ProcessorInvocationFailed};
use crate::observability::messages::task::{
    EngineDefect, LastTaskCompleted, LastTaskStarted, TaskReceived,
};
use crate::observability::messages::StructuredLog;
use crate::reporting::StatusReporter;
use crate::task::consts::{LAST_TASK_ID, NO_PROCESSOR};
use crate::task::{ExecuteType, ProcessResult, TaskAssignment, TaskContext, TaskStatus};
use crate::traits::{Capability, Processor};
use crate::utils::{execute_with_retry, panic_message};

pub struct ProcessorRunner {
    runtime: WorkerRuntime,
    assignment: TaskAssignment,
}

impl ProcessorRunner {
    pub fn new(runtime: WorkerRuntime, assignment: TaskAssignment) -> Self {
        Self {
            runtime,
            assignment,
        }
    }

    /// Run the assignment to completion. Never fails; every outcome is reported.
    pub async fn run(self) {
        let received = TaskReceived {
            instance_id: &self.assignment.instance_id,
            task_id: &self.assignment.task_id,
            task_name: &self.assignment.task_name,
            processor_info: &self.assignment.processor_info,
        };
        let span = received.span("run");
        received.log();

        async {
            let reporter = StatusReporter::new(
                self.runtime.sink.clone(),
                self.assignment.instance_id.as_str(),
                self.assignment.task_id.as_str(),
            );

            if let Err(e) = self.execute(&reporter).await {
                EngineDefect {
                    instance_id: &self.assignment.instance_id,
                    task_id: &self.assignment.task_id,
                    error: &e,
                }
                .log();
                // a broadcast root task only ever closes through its pre-execute report
                if self.is_broadcast_root() {
                    reporter.report_pre_execute_finished(&ProcessResult::failure(e.to_string()));
                } else {
                    reporter.report_status(TaskStatus::ProcessFailed, Some(e.to_string()));
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn execute(&self, reporter: &StatusReporter) -> Result<(), WorkerError> {
        reporter.report_status(TaskStatus::Processing, None);
        let mut ctx = TaskContext::new(&self.assignment, self.runtime.sink.clone())?;

        let Some(processor) = self
            .runtime
            .resolver
            .resolve(self.assignment.processor_type, &self.assignment.processor_info)
        else {
            reporter.report_status(TaskStatus::ProcessFailed, Some(NO_PROCESSOR.to_string()));
            return Ok(());
        };

        if self.is_broadcast_root() {
            let result = pre_process(processor.as_ref(), &mut ctx).await;
            reporter.report_pre_execute_finished(&result);
            return Ok(());
        }

        if self.assignment.is_last_task() {
            return self.run_last_task(processor.as_ref(), &mut ctx, reporter).await;
        }

        let task = ctx.description();
        let result = guarded(&task, "process", processor.process(&mut ctx)).await;
        reporter.report_result(&result);
        Ok(())
    }

    fn is_broadcast_root(&self) -> bool {
        self.assignment.is_root_task() && self.assignment.execute_type == ExecuteType::Broadcast
    }

    async fn run_last_task(
        &self,
        processor: &dyn Processor,
        ctx: &mut TaskContext,
        reporter: &StatusReporter,
    ) -> Result<(), WorkerError> {
        let started = Instant::now();
        let execute_type = ctx.execute_type;
        LastTaskStarted {
            instance_id: &self.assignment.instance_id,
            task_id: &self.assignment.task_id,
            execute_type,
        }
        .log();

        let mut task_results = self.fetch_task_results().await?;
        task_results.remove(LAST_TASK_ID);

        let task = ctx.description();
        let result = match execute_type {
            ExecuteType::Broadcast => match processor.as_broadcast() {
                Some(broadcast) => {
                    guarded(&task, "post-process", broadcast.post_process(ctx, task_results)).await
                }
                None => capability_missing(&task, "post-process", processor, Capability::Broadcast),
            },
            ExecuteType::MapReduce => match processor.as_map_reduce() {
                Some(map_reduce) => {
                    guarded(&task, "reduce", map_reduce.reduce(ctx, task_results)).await
                }
                None => capability_missing(&task, "reduce", processor, Capability::MapReduce),
            },
            ExecuteType::Standalone => {
                FanInNotSupported {
                    task: &task,
                    execute_type,
                }
                .log();
                let error = WorkerError::InvalidExecuteType {
                    execute_type,
                    task_id: ctx.task_id.clone(),
                };
                ProcessResult::failure(error.to_string())
            }
        };

        LastTaskCompleted {
            instance_id: &self.assignment.instance_id,
            task_id: &self.assignment.task_id,
            success: result.is_success(),
            duration: started.elapsed(),
        }
        .log();
        reporter.report_result(&result);
        Ok(())
    }

    async fn fetch_task_results(&self) -> Result<HashMap<String, String>, WorkerError> {
        let persistence = &self.runtime.persistence;
        let instance_id = self.assignment.instance_id.as_str();
        let retry = self.runtime.persistence_retry;

        execute_with_retry(
            || persistence.get_task_id_to_result_map(instance_id),
            retry.times,
            retry.interval,
        )
        .await
    }
}

async fn pre_process(processor: &dyn Processor, ctx: &mut TaskContext) -> ProcessResult {
    let task = ctx.description();
    match processor.as_broadcast() {
        Some(broadcast) => guarded(&task, "pre-process", broadcast.pre_process(ctx)).await,
        None => capability_missing(&task, "pre-process", processor, Capability::Broadcast),
    }
}

/// Await a processor call, turning an error or a panic into a failed result
async fn guarded<F>(task: &str, phase: &str, call: F) -> ProcessResult
where
    F: Future<Output = anyhow::Result<ProcessResult>>,
{
    let reason = match AssertUnwindSafe(call).catch_unwind().await {
        Ok(Ok(result)) => return result,
        Ok(Err(e)) => e.to_string(),
        Err(panic) => format!("panicked: {}", panic_message(panic.as_ref())),
    };

    ProcessorInvocationFailed {
        task,
        phase,
        reason: &reason,
    }
    .log();
    ProcessResult::failure(reason)
}

fn capability_missing(
    task: &str,
    phase: &str,
    processor: &dyn Processor,
    capability: Capability,
) -> ProcessResult {
    let reason = WorkerError::MissingCapability {
        processor: processor.name().to_string(),
        capability,
    }
    .to_string();

    ProcessorInvocationFailed {
        task,
        phase,
        reason: &reason,
    }
    .log();
    ProcessResult::failure(reason)
}
