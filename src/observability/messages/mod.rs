// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Messages are organized by subsystem:
//!
//! * `task` - task lifecycle inside the engine and reporting to the tracker
//! * `processor` - processor resolution and invocation
//! * `retry` - attempts made by the retry executor

pub mod processor;
pub mod retry;
pub mod task;

use tracing::Span;

/// A log event that knows its level and its structured fields.
pub trait StructuredLog {
    /// Emit the event at its level, with fields and the `Display` text
    fn log(&self);

    /// A span carrying the same fields, for instrumenting work tied to the event
    fn span(&self, name: &str) -> Span {
        tracing::trace_span!("event", span_name = name)
    }
}
