// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised by the task execution engine itself.
//!
//! Processor code reports its own failures through `anyhow::Result`; those are
//! turned into a failed `ProcessResult` at the call site and never show up here.

use crate::task::ExecuteType;
use crate::traits::Capability;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkerError {
    /// The task position requires a capability the processor does not implement
    #[error("processor '{processor}' does not implement the {capability} capability")]
    MissingCapability {
        processor: String,
        capability: Capability,
    },

    /// The last task was dispatched for an execute type that has no fan-in phase
    #[error("execute type {execute_type} has no fan-in phase (task {task_id})")]
    InvalidExecuteType {
        execute_type: ExecuteType,
        task_id: String,
    },

    #[error("invalid sub-task payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("task persistence failure: {0}")]
    Persistence(String),

    #[error("component '{name}' could not be resolved: {reason}")]
    ComponentLookup { name: String, reason: String },

    #[error("invalid map request: {0}")]
    InvalidMapRequest(String),
}
