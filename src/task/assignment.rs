// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

use crate::task::consts::{LAST_TASK_ID, ROOT_TASK_ID};
use crate::task::{ExecuteType, ProcessorType};

/// A unit-of-work assignment received from the tracker.
///
/// Immutable once received; the engine builds a fresh `TaskContext` from it for
/// every execution. In the JSON wire form the optional `sub_task` payload is
/// carried as a base64 string.
///
/// # Example
/// ```json
/// {
///   "instance_id": "1024",
///   "task_id": "0.3",
///   "task_name": "WORD_COUNT_LINE",
///   "job_id": "7",
///   "processor_type": "EMBEDDED",
///   "processor_info": "word_count",
///   "execute_type": "MAP_REDUCE",
///   "sub_task": "eyJsaW5lIjoiaGVsbG8ifQ=="
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskAssignment {
    pub instance_id: String,
    pub task_id: String,
    pub task_name: String,
    pub job_id: String,
    pub processor_type: ProcessorType,
    pub processor_info: String,
    pub execute_type: ExecuteType,
    #[serde(
        default,
        with = "base64_payload",
        skip_serializing_if = "Option::is_none"
    )]
    pub sub_task: Option<Vec<u8>>,
    #[serde(default)]
    pub job_params: Option<String>,
    #[serde(default)]
    pub instance_params: Option<String>,
    #[serde(default)]
    pub max_retry_times: u32,
    #[serde(default)]
    pub current_retry_times: u32,
}

impl TaskAssignment {
    /// Assignment for an embedded processor with no payload or parameters
    pub fn new(
        instance_id: impl Into<String>,
        task_id: impl Into<String>,
        task_name: impl Into<String>,
        job_id: impl Into<String>,
        processor_info: impl Into<String>,
        execute_type: ExecuteType,
    ) -> Self {
        Self {
            instance_id: instance_id.into(),
            task_id: task_id.into(),
            task_name: task_name.into(),
            job_id: job_id.into(),
            processor_type: ProcessorType::Embedded,
            processor_info: processor_info.into(),
            execute_type,
            sub_task: None,
            job_params: None,
            instance_params: None,
            max_retry_times: 0,
            current_retry_times: 0,
        }
    }

    pub fn with_sub_task(mut self, payload: Vec<u8>) -> Self {
        self.sub_task = Some(payload);
        self
    }

    pub fn with_job_params(mut self, params: impl Into<String>) -> Self {
        self.job_params = Some(params.into());
        self
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn is_root_task(&self) -> bool {
        self.task_id == ROOT_TASK_ID
    }

    pub fn is_last_task(&self) -> bool {
        self.task_id == LAST_TASK_ID
    }
}

mod base64_payload {
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(bytes) => serializer.serialize_some(&STANDARD.encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error> {
        let encoded: Option<String> = Option::deserialize(deserializer)?;
        encoded
            .map(|s| STANDARD.decode(s).map_err(serde::de::Error::custom))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_assignment_without_payload() {
        let json = r#"{
            "instance_id": "1024",
            "task_id": "17",
            "task_name": "SIMPLE",
            "job_id": "7",
            "processor_type": "EMBEDDED",
            "processor_info": "echo",
            "execute_type": "STANDALONE"
        }"#;

        let assignment = TaskAssignment::from_json(json).unwrap();
        assert_eq!(assignment.task_id, "17");
        assert_eq!(assignment.execute_type, ExecuteType::Standalone);
        assert_eq!(assignment.processor_type, ProcessorType::Embedded);
        assert!(assignment.sub_task.is_none());
        assert_eq!(assignment.max_retry_times, 0);
    }

    #[test]
    fn test_parse_assignment_with_base64_payload() {
        // {"line":"hello"}
        let json = r#"{
            "instance_id": "1024",
            "task_id": "0.3",
            "task_name": "WORD_COUNT_LINE",
            "job_id": "7",
            "processor_type": "EMBEDDED",
            "processor_info": "word_count",
            "execute_type": "MAP_REDUCE",
            "sub_task": "eyJsaW5lIjoiaGVsbG8ifQ=="
        }"#;

        let assignment = TaskAssignment::from_json(json).unwrap();
        assert_eq!(assignment.sub_task.as_deref(), Some(br#"{"line":"hello"}"#.as_slice()));
    }

    #[test]
    fn test_reject_invalid_base64_payload() {
        let json = r#"{
            "instance_id": "1", "task_id": "1", "task_name": "t", "job_id": "1",
            "processor_type": "EMBEDDED", "processor_info": "echo",
            "execute_type": "STANDALONE", "sub_task": "not base64!"
        }"#;

        assert!(TaskAssignment::from_json(json).is_err());
    }

    #[test]
    fn test_sentinel_classification() {
        let root = TaskAssignment::new("1", ROOT_TASK_ID, "ROOT_TASK", "1", "echo", ExecuteType::Broadcast);
        let last = TaskAssignment::new("1", LAST_TASK_ID, "LAST_TASK", "1", "echo", ExecuteType::Broadcast);
        let ordinary = TaskAssignment::new("1", "0.1", "child", "1", "echo", ExecuteType::Broadcast);

        assert!(root.is_root_task() && !root.is_last_task());
        assert!(last.is_last_task() && !last.is_root_task());
        assert!(!ordinary.is_root_task() && !ordinary.is_last_task());
    }
}
