// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for task lifecycle events.
//!
//! This module contains message types for logging events related to:
//! * Assignment intake and dispatch
//! * Sentinel (last task) execution
//! * Reports sent to, or dropped before reaching, the tracker
//! * Engine defects that escaped the state machine

use crate::observability::messages::StructuredLog;
use crate::task::{ExecuteType, TaskStatus};
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// Runner started on an assignment.
///
/// # Log Level
/// `debug!` - Detailed diagnostic information
///
/// # Example
/// ```
/// use the_taskrunner::observability::messages::task::TaskReceived;
///
/// let msg = TaskReceived {
///     instance_id: "1024",
///     task_id: "17",
///     task_name: "SIMPLE",
///     processor_info: "echo",
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct TaskReceived<'a> {
    pub instance_id: &'a str,
    pub task_id: &'a str,
    pub task_name: &'a str,
    pub processor_info: &'a str,
}

impl Display for TaskReceived<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "start to run task(instanceId={}&taskId={}&taskName={}) with processor '{}'",
            self.instance_id, self.task_id, self.task_name, self.processor_info
        )
    }
}

impl StructuredLog for TaskReceived<'_> {
    fn log(&self) {
        tracing::debug!(
            instance_id = self.instance_id,
            task_id = self.task_id,
            task_name = self.task_name,
            processor_info = self.processor_info,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "task",
            span_name = name,
            instance_id = self.instance_id,
            task_id = self.task_id,
            task_name = self.task_name,
        )
    }
}

/// Status report handed to the sink.
///
/// # Log Level
/// `debug!` - Detailed diagnostic information
pub struct StatusReported<'a> {
    pub instance_id: &'a str,
    pub task_id: &'a str,
    pub status: TaskStatus,
    pub result: Option<&'a str>,
}

impl Display for StatusReported<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "reporting {:?} for task(instanceId={},taskId={})",
            self.status, self.instance_id, self.task_id
        )?;
        if let Some(result) = self.result {
            write!(f, ": {}", result)?;
        }
        Ok(())
    }
}

impl StructuredLog for StatusReported<'_> {
    fn log(&self) {
        tracing::debug!(
            instance_id = self.instance_id,
            task_id = self.task_id,
            status = self.status.value(),
            "{}", self
        );
    }
}

/// Broadcast pre-execute outcome handed to the sink.
///
/// # Log Level
/// `debug!` - Detailed diagnostic information
pub struct PreExecuteReported<'a> {
    pub instance_id: &'a str,
    pub task_id: &'a str,
    pub success: bool,
    pub msg: &'a str,
}

impl Display for PreExecuteReported<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let outcome = if self.success { "succeeded" } else { "failed" };
        write!(
            f,
            "reporting pre-execute {} for task(instanceId={},taskId={}): {}",
            outcome, self.instance_id, self.task_id, self.msg
        )
    }
}

impl StructuredLog for PreExecuteReported<'_> {
    fn log(&self) {
        tracing::debug!(
            instance_id = self.instance_id,
            task_id = self.task_id,
            success = self.success,
            "{}", self
        );
    }
}

/// A tracker message could not be handed over and was dropped.
///
/// # Log Level
/// `warn!` - Potential issue or degraded behavior
pub struct ReportDropped<'a> {
    pub kind: &'a str,
    pub instance_id: &'a str,
    pub task_id: &'a str,
    pub reason: &'a str,
}

impl Display for ReportDropped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "dropped {} message for task(instanceId={},taskId={}): {}",
            self.kind, self.instance_id, self.task_id, self.reason
        )
    }
}

impl StructuredLog for ReportDropped<'_> {
    fn log(&self) {
        tracing::warn!(
            kind = self.kind,
            instance_id = self.instance_id,
            task_id = self.task_id,
            "{}", self
        );
    }
}

/// A processor fanned out child tasks.
///
/// # Log Level
/// `debug!` - Detailed diagnostic information
pub struct SubTasksMapped<'a> {
    pub instance_id: &'a str,
    pub task_id: &'a str,
    pub task_name: &'a str,
    pub count: usize,
}

impl Display for SubTasksMapped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "task(instanceId={},taskId={}) mapped {} sub-tasks named '{}'",
            self.instance_id, self.task_id, self.count, self.task_name
        )
    }
}

impl StructuredLog for SubTasksMapped<'_> {
    fn log(&self) {
        tracing::debug!(
            instance_id = self.instance_id,
            task_id = self.task_id,
            task_name = self.task_name,
            count = self.count,
            "{}", self
        );
    }
}

/// The fan-in task of an instance started.
///
/// # Log Level
/// `info!` - Important operational event
pub struct LastTaskStarted<'a> {
    pub instance_id: &'a str,
    pub task_id: &'a str,
    pub execute_type: ExecuteType,
}

impl Display for LastTaskStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "instance({})'s last task({}) start to process ({})",
            self.instance_id, self.task_id, self.execute_type
        )
    }
}

impl StructuredLog for LastTaskStarted<'_> {
    fn log(&self) {
        tracing::info!(
            instance_id = self.instance_id,
            task_id = self.task_id,
            execute_type = self.execute_type.as_str(),
            "{}", self
        );
    }
}

/// The fan-in task of an instance finished.
///
/// # Log Level
/// `info!` - Important operational event
pub struct LastTaskCompleted<'a> {
    pub instance_id: &'a str,
    pub task_id: &'a str,
    pub success: bool,
    pub duration: Duration,
}

impl Display for LastTaskCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let outcome = if self.success { "succeeded" } else { "failed" };
        write!(
            f,
            "instance({})'s last task({}) {}, using time: {:?}",
            self.instance_id, self.task_id, outcome, self.duration
        )
    }
}

impl StructuredLog for LastTaskCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            instance_id = self.instance_id,
            task_id = self.task_id,
            success = self.success,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }
}

/// An error escaped the execution state machine. Always a bug in the engine,
/// never in processor code.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct EngineDefect<'a> {
    pub instance_id: &'a str,
    pub task_id: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for EngineDefect<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "execute task(instanceId={},taskId={}) failed, please fix this bug: {}",
            self.instance_id, self.task_id, self.error
        )
    }
}

impl StructuredLog for EngineDefect<'_> {
    fn log(&self) {
        tracing::error!(
            instance_id = self.instance_id,
            task_id = self.task_id,
            error = %self.error,
            "{}", self
        );
    }
}

/// A runner panicked outside any processor call.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct RunnerPanicked<'a> {
    pub instance_id: &'a str,
    pub task_id: &'a str,
    pub reason: &'a str,
}

impl Display for RunnerPanicked<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "runner for task(instanceId={},taskId={}) panicked: {}",
            self.instance_id, self.task_id, self.reason
        )
    }
}

impl StructuredLog for RunnerPanicked<'_> {
    fn log(&self) {
        tracing::error!(
            instance_id = self.instance_id,
            task_id = self.task_id,
            reason = self.reason,
            "{}", self
        );
    }
}

/// The dispatcher stopped accepting work and is waiting for running tasks.
///
/// # Log Level
/// `info!` - Important operational event
pub struct DispatcherDraining {
    pub in_flight: usize,
}

impl Display for DispatcherDraining {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "dispatcher shutting down, waiting for {} running tasks",
            self.in_flight
        )
    }
}

impl StructuredLog for DispatcherDraining {
    fn log(&self) {
        tracing::info!(in_flight = self.in_flight, "{}", self);
    }
}
