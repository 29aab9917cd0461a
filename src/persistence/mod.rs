// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Local task persistence as seen by the engine.
//!
//! The engine only ever reads the aggregated sub-task results of an instance,
//! for the last task's fan-in. Storage internals live behind
//! [`TaskPersistence`]; [`InMemoryTaskStore`] backs local runs and tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::errors::WorkerError;

#[async_trait]
pub trait TaskPersistence: Send + Sync {
    /// Sub-task id to result message for every finished task of `instance_id`.
    ///
    /// The returned map is the caller's own copy.
    async fn get_task_id_to_result_map(
        &self,
        instance_id: &str,
    ) -> Result<HashMap<String, String>, WorkerError>;
}

/// Task results kept in process memory, keyed by instance.
#[derive(Debug, Default)]
pub struct InMemoryTaskStore {
    results: Mutex<HashMap<String, HashMap<String, String>>>,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_result(
        &self,
        instance_id: &str,
        task_id: &str,
        result: impl Into<String>,
    ) -> Result<(), WorkerError> {
        let mut results = self
            .results
            .lock()
            .map_err(|_| WorkerError::Persistence("result store lock poisoned".to_string()))?;
        results
            .entry(instance_id.to_string())
            .or_default()
            .insert(task_id.to_string(), result.into());
        Ok(())
    }

    /// Forget every result of a finished instance
    pub fn remove_instance(&self, instance_id: &str) -> Result<(), WorkerError> {
        let mut results = self
            .results
            .lock()
            .map_err(|_| WorkerError::Persistence("result store lock poisoned".to_string()))?;
        results.remove(instance_id);
        Ok(())
    }
}

#[async_trait]
impl TaskPersistence for InMemoryTaskStore {
    async fn get_task_id_to_result_map(
        &self,
        instance_id: &str,
    ) -> Result<HashMap<String, String>, WorkerError> {
        let results = self
            .results
            .lock()
            .map_err(|_| WorkerError::Persistence("result store lock poisoned".to_string()))?;
        Ok(results.get(instance_id).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_results_are_scoped_per_instance() {
        let store = InMemoryTaskStore::new();
        store.record_result("1", "0.0", "3").unwrap();
        store.record_result("1", "0.1", "4").unwrap();
        store.record_result("2", "0.0", "9").unwrap();

        let first = store.get_task_id_to_result_map("1").await.unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(first.get("0.1").map(String::as_str), Some("4"));

        let unknown = store.get_task_id_to_result_map("missing").await.unwrap();
        assert!(unknown.is_empty());
    }

    #[tokio::test]
    async fn test_returned_map_is_a_copy() {
        let store = InMemoryTaskStore::new();
        store.record_result("1", "9999", "placeholder").unwrap();

        let mut copy = store.get_task_id_to_result_map("1").await.unwrap();
        copy.remove("9999");

        let again = store.get_task_id_to_result_map("1").await.unwrap();
        assert!(again.contains_key("9999"));
    }

    #[tokio::test]
    async fn test_remove_instance() {
        let store = InMemoryTaskStore::new();
        store.record_result("1", "0.0", "x").unwrap();
        store.remove_instance("1").unwrap();
        assert!(store.get_task_id_to_result_map("1").await.unwrap().is_empty());
    }
}
