// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::observability::messages::task::{PreExecuteReported, StatusReported};
use crate::observability::messages::StructuredLog;
use crate::reporting::{BroadcastPreExecuteFinished, ReportSink, TaskStatusReport, TrackerMessage};
use crate::task::{ProcessResult, TaskStatus};

/// Builds tracker messages for one task and hands them to the sink.
pub struct StatusReporter {
    sink: Arc<dyn ReportSink>,
    instance_id: String,
    task_id: String,
}

impl StatusReporter {
    pub fn new(sink: Arc<dyn ReportSink>, instance_id: impl Into<String>, task_id: impl Into<String>) -> Self {
        Self {
            sink,
            instance_id: instance_id.into(),
            task_id: task_id.into(),
        }
    }

    pub fn report_status(&self, status: TaskStatus, result: Option<String>) {
        StatusReported {
            instance_id: &self.instance_id,
            task_id: &self.task_id,
            status,
            result: result.as_deref(),
        }
        .log();

        self.sink.send(TrackerMessage::ReportTaskStatus(TaskStatusReport {
            instance_id: self.instance_id.clone(),
            task_id: self.task_id.clone(),
            status,
            result,
        }));
    }

    /// Terminal report for a finished processor call
    pub fn report_result(&self, result: &ProcessResult) {
        self.report_status(
            TaskStatus::from_outcome(result.is_success()),
            Some(result.msg().to_string()),
        );
    }

    pub fn report_pre_execute_finished(&self, result: &ProcessResult) {
        PreExecuteReported {
            instance_id: &self.instance_id,
            task_id: &self.task_id,
            success: result.is_success(),
            msg: result.msg(),
        }
        .log();

        self.sink
            .send(TrackerMessage::BroadcastPreExecuteFinished(BroadcastPreExecuteFinished {
                instance_id: self.instance_id.clone(),
                task_id: self.task_id.clone(),
                success: result.is_success(),
                msg: Some(result.msg().to_string()),
            }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporting::RecordingSink;

    #[test]
    fn test_report_result_maps_outcome_to_status() {
        let sink = RecordingSink::new();
        let reporter = StatusReporter::new(sink.clone(), "1", "17");

        reporter.report_status(TaskStatus::Processing, None);
        reporter.report_result(&ProcessResult::success("ok"));
        reporter.report_result(&ProcessResult::failure("boom"));

        let reports = sink.status_reports();
        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].status, TaskStatus::Processing);
        assert_eq!(reports[0].result, None);
        assert_eq!(reports[1].status, TaskStatus::ProcessSuccess);
        assert_eq!(reports[1].result.as_deref(), Some("ok"));
        assert_eq!(reports[2].status, TaskStatus::ProcessFailed);
        assert_eq!(reports[2].result.as_deref(), Some("boom"));
        assert!(reports.iter().all(|r| r.instance_id == "1" && r.task_id == "17"));
    }

    #[test]
    fn test_pre_execute_report_has_its_own_shape() {
        let sink = RecordingSink::new();
        let reporter = StatusReporter::new(sink.clone(), "1", "0");

        reporter.report_pre_execute_finished(&ProcessResult::failure("not ready"));

        let messages = sink.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(
            messages[0],
            TrackerMessage::BroadcastPreExecuteFinished(BroadcastPreExecuteFinished {
                instance_id: "1".to_string(),
                task_id: "0".to_string(),
                success: false,
                msg: Some("not ready".to_string()),
            })
        );
        assert!(sink.status_reports().is_empty());
    }
}
