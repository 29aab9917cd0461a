// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for processor resolution and invocation.
//!
//! This module contains message types for logging events related to:
//! * Resolving a processor identifier through the container and the registry
//! * Processor calls that failed, panicked or hit a missing capability
//! * Task positions that no execute type can legally reach

use crate::observability::messages::StructuredLog;
use crate::task::{ExecuteType, ProcessorType};
use std::fmt::{Display, Formatter};

/// Processor identifier resolved.
///
/// # Log Level
/// `debug!` - Detailed diagnostic information
///
/// # Example
/// ```
/// use the_taskrunner::observability::messages::processor::ProcessorResolved;
///
/// let msg = ProcessorResolved {
///     processor_info: "word_count",
///     processor: "word_count",
///     source: "registry",
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct ProcessorResolved<'a> {
    pub processor_info: &'a str,
    pub processor: &'a str,
    pub source: &'a str,
}

impl Display for ProcessorResolved<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "resolved '{}' to processor '{}' via {}",
            self.processor_info, self.processor, self.source
        )
    }
}

impl StructuredLog for ProcessorResolved<'_> {
    fn log(&self) {
        tracing::debug!(
            processor_info = self.processor_info,
            processor = self.processor,
            source = self.source,
            "{}", self
        );
    }
}

/// Component container could not supply the processor; resolution falls through.
///
/// # Log Level
/// `warn!` - Potential issue or degraded behavior
pub struct ComponentLookupFailed<'a> {
    pub processor_info: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for ComponentLookupFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "no container component for processor '{}', trying registry: {}",
            self.processor_info, self.error
        )
    }
}

impl StructuredLog for ComponentLookupFailed<'_> {
    fn log(&self) {
        tracing::warn!(
            processor_info = self.processor_info,
            error = %self.error,
            "{}", self
        );
    }
}

/// Every resolution strategy failed.
///
/// # Log Level
/// `warn!` - Potential issue or degraded behavior
pub struct ProcessorNotResolved<'a> {
    pub processor_info: &'a str,
    pub processor_type: ProcessorType,
}

impl Display for ProcessorNotResolved<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "no {} processor found for '{}'",
            self.processor_type, self.processor_info
        )
    }
}

impl StructuredLog for ProcessorNotResolved<'_> {
    fn log(&self) {
        tracing::warn!(
            processor_info = self.processor_info,
            processor_type = %self.processor_type,
            "{}", self
        );
    }
}

/// A processor call ended in an error or a panic and was converted to a failed result.
///
/// # Log Level
/// `warn!` - Potential issue or degraded behavior
pub struct ProcessorInvocationFailed<'a> {
    pub task: &'a str,
    pub phase: &'a str,
    pub reason: &'a str,
}

impl Display for ProcessorInvocationFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "task({}) {} failed: {}",
            self.task, self.phase, self.reason
        )
    }
}

impl StructuredLog for ProcessorInvocationFailed<'_> {
    fn log(&self) {
        tracing::warn!(
            task = self.task,
            phase = self.phase,
            reason = self.reason,
            "{}", self
        );
    }
}

/// The last task was reached by an execute type that has no fan-in phase.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct FanInNotSupported<'a> {
    pub task: &'a str,
    pub execute_type: ExecuteType,
}

impl Display for FanInNotSupported<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "task({}) is a last task but execute type {} has no fan-in phase",
            self.task, self.execute_type
        )
    }
}

impl StructuredLog for FanInNotSupported<'_> {
    fn log(&self) {
        tracing::error!(
            task = self.task,
            execute_type = self.execute_type.as_str(),
            "{}", self
        );
    }
}
