// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Fire-and-forget reporting from the worker to the tracker.
//!
//! Everything the engine tells the tracker goes through a [`ReportSink`]. Sends
//! never block and are never acknowledged; delivery is best-effort.

mod messages;
mod reporter;
mod sink;
#[cfg(test)]
mod recording;

pub use messages::{
    BroadcastPreExecuteFinished, MapSubTask, MapTaskRequest, TaskStatusReport, TrackerMessage,
};
pub use reporter::StatusReporter;
pub use sink::{ChannelReportSink, ReportSink};
#[cfg(test)]
pub(crate) use recording::RecordingSink;
