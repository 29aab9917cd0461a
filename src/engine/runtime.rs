// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;
use std::time::Duration;

use crate::config::consts::{DEFAULT_PERSISTENCE_RETRY_INTERVAL_MS, DEFAULT_PERSISTENCE_RETRY_TIMES};
use crate::persistence::TaskPersistence;
use crate::reporting::ReportSink;
use crate::resolver::ProcessorResolver;
use crate::utils::RetrySettings;

/// Collaborators shared by every runner of a worker.
///
/// Cloning is cheap; all collaborators sit behind `Arc`.
#[derive(Clone)]
pub struct WorkerRuntime {
    pub resolver: Arc<dyn ProcessorResolver>,
    pub persistence: Arc<dyn TaskPersistence>,
    pub sink: Arc<dyn ReportSink>,
    pub persistence_retry: RetrySettings,
}

impl WorkerRuntime {
    pub fn new(
        resolver: Arc<dyn ProcessorResolver>,
        persistence: Arc<dyn TaskPersistence>,
        sink: Arc<dyn ReportSink>,
    ) -> Self {
        Self {
            resolver,
            persistence,
            sink,
            persistence_retry: RetrySettings::new(
                DEFAULT_PERSISTENCE_RETRY_TIMES,
                Duration::from_millis(DEFAULT_PERSISTENCE_RETRY_INTERVAL_MS),
            ),
        }
    }

    pub fn with_persistence_retry(mut self, retry: RetrySettings) -> Self {
        self.persistence_retry = retry;
        self
    }
}
