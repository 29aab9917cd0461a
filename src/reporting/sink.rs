// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use tokio::sync::mpsc;

use crate::observability::messages::{task::ReportDropped, StructuredLog};
use crate::reporting::TrackerMessage;

/// Destination for messages addressed to the tracker.
///
/// `send` must return immediately; implementations may drop messages they
/// cannot deliver.
pub trait ReportSink: Send + Sync {
    fn send(&self, message: TrackerMessage);
}

/// Sink backed by an unbounded tokio channel; the receiving half belongs to
/// whatever transport forwards messages to the tracker.
#[derive(Debug, Clone)]
pub struct ChannelReportSink {
    tx: mpsc::UnboundedSender<TrackerMessage>,
}

impl ChannelReportSink {
    pub fn new(tx: mpsc::UnboundedSender<TrackerMessage>) -> Self {
        Self { tx }
    }

    /// Create a sink together with the receiver it feeds
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<TrackerMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }
}

impl ReportSink for ChannelReportSink {
    fn send(&self, message: TrackerMessage) {
        if let Err(mpsc::error::SendError(message)) = self.tx.send(message) {
            ReportDropped {
                kind: message.kind(),
                instance_id: message.instance_id(),
                task_id: message.task_id(),
                reason: "tracker channel closed",
            }
            .log();
        }
    }
}
