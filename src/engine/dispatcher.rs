// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tokio_util::task::TaskTracker;

use crate::engine::{ProcessorRunner, WorkerRuntime};
use crate::observability::messages::task::{DispatcherDraining, RunnerPanicked};
use crate::observability::messages::StructuredLog;
use crate::task::TaskAssignment;
use crate::utils::panic_message;

/// Runs every submitted assignment on its own tokio task.
///
/// `submit` never waits. With a concurrency limit, the permit is acquired
/// inside the spawned task, so a saturated worker queues work instead of
/// blocking the caller.
pub struct TaskDispatcher {
    runtime: WorkerRuntime,
    tracker: TaskTracker,
    limiter: Option<Arc<Semaphore>>,
}

impl TaskDispatcher {
    pub fn new(runtime: WorkerRuntime, max_concurrency: Option<usize>) -> Self {
        Self {
            runtime,
            tracker: TaskTracker::new(),
            limiter: max_concurrency.map(|limit| Arc::new(Semaphore::new(limit))),
        }
    }

    pub fn submit(&self, assignment: TaskAssignment) -> JoinHandle<()> {
        let instance_id = assignment.instance_id.clone();
        let task_id = assignment.task_id.clone();
        let runner = ProcessorRunner::new(self.runtime.clone(), assignment);
        let limiter = self.limiter.clone();

        self.tracker.spawn(async move {
            // the semaphore is never closed, so a failed acquire cannot happen
            let _permit = match limiter {
                Some(limiter) => limiter.acquire_owned().await.ok(),
                None => None,
            };

            if let Err(panic) = AssertUnwindSafe(runner.run()).catch_unwind().await {
                RunnerPanicked {
                    instance_id: &instance_id,
                    task_id: &task_id,
                    reason: &panic_message(panic.as_ref()),
                }
                .log();
            }
        })
    }

    /// Assignments spawned and not yet finished, queued ones included
    pub fn in_flight(&self) -> usize {
        self.tracker.len()
    }

    /// Stop tracking new work and wait for everything already submitted
    pub async fn shutdown(&self) {
        DispatcherDraining {
            in_flight: self.in_flight(),
        }
        .log();
        self.tracker.close();
        self.tracker.wait().await;
    }
}
