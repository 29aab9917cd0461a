// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// How the tasks of a job instance are laid out.
///
/// Fixed per instance. `Broadcast` and `MapReduce` instances carry a root and a
/// last task; `Standalone` instances have neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExecuteType {
    Standalone,
    Broadcast,
    MapReduce,
}

impl ExecuteType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecuteType::Standalone => "STANDALONE",
            ExecuteType::Broadcast => "BROADCAST",
            ExecuteType::MapReduce => "MAP_REDUCE",
        }
    }

    /// Whether instances of this type end with a fan-in (last) task
    pub fn has_fan_in(&self) -> bool {
        !matches!(self, ExecuteType::Standalone)
    }
}

impl Display for ExecuteType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the processor identifier of an assignment is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProcessorType {
    /// Processor code compiled into the worker, resolved in-process
    Embedded,
}

impl Display for ProcessorType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessorType::Embedded => f.write_str("EMBEDDED"),
        }
    }
}

/// Task lifecycle states as understood by the tracker.
///
/// The worker only ever reports `Processing`, `ProcessSuccess` and
/// `ProcessFailed`; the remaining states belong to the tracker's dispatch
/// bookkeeping and are listed so both sides share one numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    WaitingDispatch,
    DispatchSuccess,
    WorkerReceived,
    Processing,
    ProcessSuccess,
    ProcessFailed,
}

impl TaskStatus {
    /// Numeric status code used on the tracker side
    pub fn value(&self) -> u8 {
        match self {
            TaskStatus::WaitingDispatch => 1,
            TaskStatus::DispatchSuccess => 2,
            TaskStatus::WorkerReceived => 3,
            TaskStatus::Processing => 4,
            TaskStatus::ProcessSuccess => 5,
            TaskStatus::ProcessFailed => 6,
        }
    }

    pub fn from_outcome(success: bool) -> Self {
        if success {
            TaskStatus::ProcessSuccess
        } else {
            TaskStatus::ProcessFailed
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskStatus::ProcessSuccess | TaskStatus::ProcessFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_type_wire_names() {
        let cases = vec![
            (ExecuteType::Standalone, "\"STANDALONE\""),
            (ExecuteType::Broadcast, "\"BROADCAST\""),
            (ExecuteType::MapReduce, "\"MAP_REDUCE\""),
        ];

        for (execute_type, expected) in cases {
            assert_eq!(serde_json::to_string(&execute_type).unwrap(), expected);
            assert_eq!(format!("\"{}\"", execute_type), expected);
        }
    }

    #[test]
    fn test_only_standalone_lacks_fan_in() {
        assert!(!ExecuteType::Standalone.has_fan_in());
        assert!(ExecuteType::Broadcast.has_fan_in());
        assert!(ExecuteType::MapReduce.has_fan_in());
    }

    #[test]
    fn test_task_status_codes_and_outcome() {
        assert_eq!(TaskStatus::Processing.value(), 4);
        assert_eq!(TaskStatus::from_outcome(true), TaskStatus::ProcessSuccess);
        assert_eq!(TaskStatus::from_outcome(false), TaskStatus::ProcessFailed);
        assert_eq!(TaskStatus::ProcessFailed.value(), 6);
        assert!(!TaskStatus::Processing.is_terminal());
        assert!(TaskStatus::ProcessFailed.is_terminal());
    }
}
