// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::Context;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::task::consts::ROOT_TASK_ID;
use crate::task::{ProcessResult, TaskContext};
use crate::traits::{MapReduceProcessor, Processor};

/// Name given to the per-line child tasks
pub const WORD_COUNT_LINE_TASK: &str = "WORD_COUNT_LINE";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordCountLine {
    pub line: String,
}

/// Word Count processor - map-reduce over the lines of the job params.
///
/// The root task maps every non-empty line to a child task, each child counts
/// the words of its line, and the last task sums the counts.
pub struct WordCountProcessor;

impl WordCountProcessor {
    pub fn new() -> Self {
        Self
    }

    fn map_lines(ctx: &mut TaskContext) -> anyhow::Result<ProcessResult> {
        let text = ctx
            .job_params
            .clone()
            .context("word_count needs the text to count in job params")?;

        let lines: Vec<WordCountLine> = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| WordCountLine {
                line: line.to_string(),
            })
            .collect();
        if lines.is_empty() {
            return Ok(ProcessResult::success("mapped 0 lines"));
        }

        let child_ids = ctx.map(lines, WORD_COUNT_LINE_TASK)?;
        Ok(ProcessResult::success(format!("mapped {} lines", child_ids.len())))
    }
}

#[async_trait]
impl Processor for WordCountProcessor {
    async fn process(&self, ctx: &mut TaskContext) -> anyhow::Result<ProcessResult> {
        if ctx.task_id == ROOT_TASK_ID {
            return Self::map_lines(ctx);
        }

        let line: WordCountLine = ctx
            .sub_task_as()?
            .context("word_count child task has no line payload")?;
        let words = line.line.split_whitespace().count();
        Ok(ProcessResult::success(words.to_string()))
    }

    fn name(&self) -> &'static str {
        "word_count"
    }

    fn as_map_reduce(&self) -> Option<&dyn MapReduceProcessor> {
        Some(self)
    }
}

#[async_trait]
impl MapReduceProcessor for WordCountProcessor {
    async fn reduce(
        &self,
        _ctx: &mut TaskContext,
        mut task_results: HashMap<String, String>,
    ) -> anyhow::Result<ProcessResult> {
        // the root task's result describes the map phase, not a count
        task_results.remove(ROOT_TASK_ID);

        let mut total: u64 = 0;
        for (task_id, result) in &task_results {
            let count = match result.trim().parse::<u64>() {
                Ok(count) => count,
                Err(_) => {
                    return Ok(ProcessResult::failure(format!(
                        "task {} produced a non-numeric count: '{}'",
                        task_id, result
                    )))
                }
            };
            total = match total.checked_add(count) {
                Some(sum) => sum,
                None => {
                    return Ok(ProcessResult::failure(format!(
                        "word count overflowed while adding task {}",
                        task_id
                    )))
                }
            };
        }

        Ok(ProcessResult::success(total.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporting::{RecordingSink, TrackerMessage};
    use crate::task::{ExecuteType, TaskAssignment};

    #[tokio::test]
    async fn test_root_task_maps_non_empty_lines() {
        let sink = RecordingSink::new();
        let root = TaskAssignment::new("1", ROOT_TASK_ID, "ROOT_TASK", "1", "word_count", ExecuteType::MapReduce)
            .with_job_params("hello world\n\n  \nthe quick brown fox");
        let mut ctx = TaskContext::new(&root, sink.clone()).unwrap();

        let result = WordCountProcessor::new().process(&mut ctx).await.unwrap();
        assert_eq!(result, ProcessResult::success("mapped 2 lines"));

        match &sink.messages()[0] {
            TrackerMessage::MapTask(request) => {
                assert_eq!(request.task_name, WORD_COUNT_LINE_TASK);
                assert_eq!(request.sub_tasks.len(), 2);
                assert_eq!(request.sub_tasks[0].task_id, "0.0");
            }
            other => panic!("expected MapTask, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_root_task_without_params_is_an_error() {
        let sink = RecordingSink::new();
        let root = TaskAssignment::new("1", ROOT_TASK_ID, "ROOT_TASK", "1", "word_count", ExecuteType::MapReduce);
        let mut ctx = TaskContext::new(&root, sink).unwrap();

        let err = WordCountProcessor::new().process(&mut ctx).await.unwrap_err();
        assert!(err.to_string().contains("job params"));
    }

    #[tokio::test]
    async fn test_child_task_counts_words() {
        let sink = RecordingSink::new();
        let child = TaskAssignment::new("1", "0.1", WORD_COUNT_LINE_TASK, "1", "word_count", ExecuteType::MapReduce)
            .with_sub_task(br#"{"line":"the quick brown fox"}"#.to_vec());
        let mut ctx = TaskContext::new(&child, sink).unwrap();

        let result = WordCountProcessor::new().process(&mut ctx).await.unwrap();
        assert_eq!(result, ProcessResult::success("4"));
    }

    #[tokio::test]
    async fn test_reduce_sums_counts_and_skips_root() {
        let sink = RecordingSink::new();
        let last = TaskAssignment::new("1", "9999", "LAST_TASK", "1", "word_count", ExecuteType::MapReduce);
        let mut ctx = TaskContext::new(&last, sink).unwrap();

        let results = HashMap::from([
            (ROOT_TASK_ID.to_string(), "mapped 2 lines".to_string()),
            ("0.0".to_string(), "2".to_string()),
            ("0.1".to_string(), "4".to_string()),
        ]);
        let result = WordCountProcessor::new().reduce(&mut ctx, results).await.unwrap();
        assert_eq!(result, ProcessResult::success("6"));

        let bad = HashMap::from([("0.0".to_string(), "many".to_string())]);
        let result = WordCountProcessor::new().reduce(&mut ctx, bad).await.unwrap();
        assert!(!result.is_success());

        let overflowing = HashMap::from([
            ("0.0".to_string(), u64::MAX.to_string()),
            ("0.1".to_string(), "1".to_string()),
        ]);
        let result = WordCountProcessor::new().reduce(&mut ctx, overflowing).await.unwrap();
        assert!(!result.is_success());
        assert!(result.msg().starts_with("word count overflowed"));
    }
}
