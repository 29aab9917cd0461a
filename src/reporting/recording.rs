// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::{Arc, Mutex};

use crate::reporting::{ReportSink, TaskStatusReport, TrackerMessage};

/// Sink that keeps every message in memory, for assertions in tests.
#[derive(Debug, Default)]
pub(crate) struct RecordingSink {
    messages: Mutex<Vec<TrackerMessage>>,
}

impl RecordingSink {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn messages(&self) -> Vec<TrackerMessage> {
        self.messages.lock().unwrap().clone()
    }

    /// Only the ordinary status reports, in send order
    pub(crate) fn status_reports(&self) -> Vec<TaskStatusReport> {
        self.messages()
            .into_iter()
            .filter_map(|m| match m {
                TrackerMessage::ReportTaskStatus(report) => Some(report),
                _ => None,
            })
            .collect()
    }
}

impl ReportSink for RecordingSink {
    fn send(&self, message: TrackerMessage) {
        self.messages.lock().unwrap().push(message);
    }
}
