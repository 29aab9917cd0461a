// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::task::TaskStatus;

/// Status transition of one task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskStatusReport {
    pub instance_id: String,
    pub task_id: String,
    pub status: TaskStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

/// Outcome of the broadcast pre-execute phase run by the root task.
///
/// The tracker branches on `success`: only a successful pre-execute fans the
/// broadcast out to every worker node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BroadcastPreExecuteFinished {
    pub instance_id: String,
    pub task_id: String,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
}

/// Child tasks produced by a processor through `TaskContext::map`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapTaskRequest {
    pub instance_id: String,
    /// Parent task
    pub task_id: String,
    pub task_name: String,
    pub sub_tasks: Vec<MapSubTask>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapSubTask {
    pub task_id: String,
    pub payload: Value,
}

/// Every message shape the worker sends to the tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "body", rename_all = "snake_case")]
pub enum TrackerMessage {
    ReportTaskStatus(TaskStatusReport),
    BroadcastPreExecuteFinished(BroadcastPreExecuteFinished),
    MapTask(MapTaskRequest),
}

impl TrackerMessage {
    pub fn instance_id(&self) -> &str {
        match self {
            TrackerMessage::ReportTaskStatus(m) => &m.instance_id,
            TrackerMessage::BroadcastPreExecuteFinished(m) => &m.instance_id,
            TrackerMessage::MapTask(m) => &m.instance_id,
        }
    }

    pub fn task_id(&self) -> &str {
        match self {
            TrackerMessage::ReportTaskStatus(m) => &m.task_id,
            TrackerMessage::BroadcastPreExecuteFinished(m) => &m.task_id,
            TrackerMessage::MapTask(m) => &m.task_id,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            TrackerMessage::ReportTaskStatus(_) => "report_task_status",
            TrackerMessage::BroadcastPreExecuteFinished(_) => "broadcast_pre_execute_finished",
            TrackerMessage::MapTask(_) => "map_task",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_report_wire_form() {
        let message = TrackerMessage::ReportTaskStatus(TaskStatusReport {
            instance_id: "1".to_string(),
            task_id: "17".to_string(),
            status: TaskStatus::ProcessSuccess,
            result: Some("ok".to_string()),
        });

        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "report_task_status",
                "body": {
                    "instance_id": "1",
                    "task_id": "17",
                    "status": "PROCESS_SUCCESS",
                    "result": "ok"
                }
            })
        );
    }

    #[test]
    fn test_pre_execute_report_omits_absent_message() {
        let message = TrackerMessage::BroadcastPreExecuteFinished(BroadcastPreExecuteFinished {
            instance_id: "1".to_string(),
            task_id: "0".to_string(),
            success: false,
            msg: None,
        });

        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["type"], "broadcast_pre_execute_finished");
        assert_eq!(value["body"]["success"], false);
        assert!(value["body"].get("msg").is_none());
        assert_eq!(message.kind(), "broadcast_pre_execute_finished");
        assert_eq!(message.task_id(), "0");
    }
}
