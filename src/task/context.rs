// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use crate::errors::WorkerError;
use crate::observability::messages::{task::SubTasksMapped, StructuredLog};
use crate::reporting::{MapSubTask, MapTaskRequest, ReportSink, TrackerMessage};
use crate::task::consts::{LAST_TASK_NAME, ROOT_TASK_NAME};
use crate::task::{ExecuteType, ProcessorType, TaskAssignment};

/// Execution context handed to a processor for one task.
///
/// Built from a `TaskAssignment` at the start of every execution and owned by
/// that execution alone. Besides the assignment fields it carries the decoded
/// sub-task payload and the counter used to mint ids for child tasks, so a
/// processor that fans out (see [`TaskContext::map`]) never needs any state
/// outside the context it was given.
pub struct TaskContext {
    pub instance_id: String,
    pub task_id: String,
    pub task_name: String,
    pub job_id: String,
    pub processor_type: ProcessorType,
    pub processor_info: String,
    pub execute_type: ExecuteType,
    pub job_params: Option<String>,
    pub instance_params: Option<String>,
    pub max_retry_times: u32,
    pub current_retry_times: u32,
    sub_task: Option<Value>,
    child_task_counter: u64,
    sink: Arc<dyn ReportSink>,
}

impl TaskContext {
    /// Build the context for one execution.
    ///
    /// An absent or empty payload yields no sub-task; a payload that is not
    /// valid JSON is an error.
    pub fn new(assignment: &TaskAssignment, sink: Arc<dyn ReportSink>) -> Result<Self, WorkerError> {
        let sub_task = match assignment.sub_task.as_deref() {
            Some(bytes) if !bytes.is_empty() => Some(serde_json::from_slice(bytes)?),
            _ => None,
        };

        Ok(Self {
            instance_id: assignment.instance_id.clone(),
            task_id: assignment.task_id.clone(),
            task_name: assignment.task_name.clone(),
            job_id: assignment.job_id.clone(),
            processor_type: assignment.processor_type,
            processor_info: assignment.processor_info.clone(),
            execute_type: assignment.execute_type,
            job_params: assignment.job_params.clone(),
            instance_params: assignment.instance_params.clone(),
            max_retry_times: assignment.max_retry_times,
            current_retry_times: assignment.current_retry_times,
            sub_task,
            child_task_counter: 0,
            sink,
        })
    }

    pub fn sub_task(&self) -> Option<&Value> {
        self.sub_task.as_ref()
    }

    /// Decode the sub-task payload into a concrete type
    pub fn sub_task_as<T: DeserializeOwned>(&self) -> Result<Option<T>, WorkerError> {
        self.sub_task
            .as_ref()
            .map(|value| T::deserialize(value).map_err(WorkerError::from))
            .transpose()
    }

    /// Mint the next child task id: `"{task_id}.{n}"`, starting at 0.
    pub fn next_child_task_id(&mut self) -> String {
        let id = format!("{}.{}", self.task_id, self.child_task_counter);
        self.child_task_counter += 1;
        id
    }

    pub fn child_tasks_minted(&self) -> u64 {
        self.child_task_counter
    }

    /// Fan out `sub_tasks` as children of the current task.
    ///
    /// Every sub-task gets a freshly minted child id and the whole batch is sent
    /// to the tracker as one `MapTask` message. Returns the minted ids.
    pub fn map<T: Serialize>(
        &mut self,
        sub_tasks: Vec<T>,
        task_name: &str,
    ) -> Result<Vec<String>, WorkerError> {
        if sub_tasks.is_empty() {
            return Err(WorkerError::InvalidMapRequest(
                "sub-task list is empty".to_string(),
            ));
        }
        if task_name == ROOT_TASK_NAME || task_name == LAST_TASK_NAME {
            return Err(WorkerError::InvalidMapRequest(format!(
                "task name '{}' is reserved",
                task_name
            )));
        }

        // encode everything first so a bad payload does not burn child ids
        let payloads = sub_tasks
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;

        let sub_tasks: Vec<MapSubTask> = payloads
            .into_iter()
            .map(|payload| MapSubTask {
                task_id: self.next_child_task_id(),
                payload,
            })
            .collect();
        let child_ids: Vec<String> = sub_tasks.iter().map(|t| t.task_id.clone()).collect();

        SubTasksMapped {
            instance_id: &self.instance_id,
            task_id: &self.task_id,
            task_name,
            count: child_ids.len(),
        }
        .log();

        self.sink.send(TrackerMessage::MapTask(MapTaskRequest {
            instance_id: self.instance_id.clone(),
            task_id: self.task_id.clone(),
            task_name: task_name.to_string(),
            sub_tasks,
        }));

        Ok(child_ids)
    }

    /// Short identification used in log lines
    pub fn description(&self) -> String {
        format!(
            "instanceId={},taskId={},taskName={}",
            self.instance_id, self.task_id, self.task_name
        )
    }
}

impl fmt::Debug for TaskContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskContext")
            .field("instance_id", &self.instance_id)
            .field("task_id", &self.task_id)
            .field("task_name", &self.task_name)
            .field("job_id", &self.job_id)
            .field("processor_info", &self.processor_info)
            .field("execute_type", &self.execute_type)
            .field("sub_task", &self.sub_task)
            .field("child_task_counter", &self.child_task_counter)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporting::RecordingSink;
    use serde::Deserialize;
    use serde_json::json;

    fn assignment() -> TaskAssignment {
        TaskAssignment::new("1024", "0", ROOT_TASK_NAME, "7", "word_count", ExecuteType::MapReduce)
    }

    #[test]
    fn test_context_copies_assignment_fields() {
        let sink = RecordingSink::new();
        let assignment = assignment().with_job_params("a b c");
        let ctx = TaskContext::new(&assignment, sink.clone()).unwrap();

        assert_eq!(ctx.instance_id, "1024");
        assert_eq!(ctx.task_id, "0");
        assert_eq!(ctx.execute_type, ExecuteType::MapReduce);
        assert_eq!(ctx.job_params.as_deref(), Some("a b c"));
        assert!(ctx.sub_task().is_none());
        assert_eq!(ctx.child_tasks_minted(), 0);
        assert_eq!(ctx.description(), "instanceId=1024,taskId=0,taskName=ROOT_TASK");
    }

    #[test]
    fn test_empty_payload_is_treated_as_absent() {
        let sink = RecordingSink::new();
        let ctx = TaskContext::new(&assignment().with_sub_task(vec![]), sink).unwrap();
        assert!(ctx.sub_task().is_none());
    }

    #[test]
    fn test_payload_is_decoded() {
        #[derive(Deserialize, PartialEq, Debug)]
        struct Line {
            line: String,
        }

        let sink = RecordingSink::new();
        let assignment = assignment().with_sub_task(br#"{"line":"hello world"}"#.to_vec());
        let ctx = TaskContext::new(&assignment, sink).unwrap();

        assert_eq!(ctx.sub_task(), Some(&json!({"line": "hello world"})));
        let line: Option<Line> = ctx.sub_task_as().unwrap();
        assert_eq!(line, Some(Line { line: "hello world".to_string() }));
    }

    #[test]
    fn test_invalid_payload_is_rejected() {
        let sink = RecordingSink::new();
        let result = TaskContext::new(&assignment().with_sub_task(b"{not json".to_vec()), sink);
        assert!(matches!(result, Err(WorkerError::Payload(_))));
    }

    #[test]
    fn test_child_ids_are_sequential_per_context() {
        let sink = RecordingSink::new();
        let mut first = TaskContext::new(&assignment(), sink.clone()).unwrap();
        let mut second = TaskContext::new(&assignment(), sink).unwrap();

        assert_eq!(first.next_child_task_id(), "0.0");
        assert_eq!(first.next_child_task_id(), "0.1");
        assert_eq!(second.next_child_task_id(), "0.0");
        assert_eq!(first.child_tasks_minted(), 2);
    }

    #[test]
    fn test_map_sends_one_request_with_minted_ids() {
        let sink = RecordingSink::new();
        let mut ctx = TaskContext::new(&assignment(), sink.clone()).unwrap();

        let ids = ctx
            .map(vec![json!({"line": "a"}), json!({"line": "b"})], "LINES")
            .unwrap();
        assert_eq!(ids, vec!["0.0", "0.1"]);

        let messages = sink.messages();
        assert_eq!(messages.len(), 1);
        match &messages[0] {
            TrackerMessage::MapTask(request) => {
                assert_eq!(request.instance_id, "1024");
                assert_eq!(request.task_id, "0");
                assert_eq!(request.task_name, "LINES");
                assert_eq!(request.sub_tasks[1].task_id, "0.1");
                assert_eq!(request.sub_tasks[1].payload, json!({"line": "b"}));
            }
            other => panic!("expected MapTask, got {:?}", other),
        }
    }

    #[test]
    fn test_map_rejects_invalid_requests() {
        let test_cases: Vec<(&str, Vec<Value>, &str)> = vec![
            ("empty sub-task list", vec![], "LINES"),
            ("root task name", vec![json!(1)], ROOT_TASK_NAME),
            ("last task name", vec![json!(1)], LAST_TASK_NAME),
        ];

        for (name, sub_tasks, task_name) in test_cases {
            let sink = RecordingSink::new();
            let mut ctx = TaskContext::new(&assignment(), sink.clone()).unwrap();

            let result = ctx.map(sub_tasks, task_name);
            assert!(
                matches!(result, Err(WorkerError::InvalidMapRequest(_))),
                "case '{}' should be rejected",
                name
            );
            assert!(sink.messages().is_empty(), "case '{}' must not send", name);
            assert_eq!(ctx.child_tasks_minted(), 0, "case '{}' must not mint ids", name);
        }
    }
}
