// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the retry executor.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;

/// An attempt raised an error and will be retried.
///
/// # Log Level
/// `warn!` - Potential issue or degraded behavior
pub struct RetryAttemptFailed<'a> {
    pub attempt: u32,
    pub max_attempts: u32,
    pub interval: Duration,
    pub error: &'a dyn Display,
}

impl Display for RetryAttemptFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "attempt {}/{} failed, retrying after {:?}: {}",
            self.attempt, self.max_attempts, self.interval, self.error
        )
    }
}

impl StructuredLog for RetryAttemptFailed<'_> {
    fn log(&self) {
        tracing::warn!(
            attempt = self.attempt,
            max_attempts = self.max_attempts,
            interval_ms = self.interval.as_millis() as u64,
            error = %self.error,
            "{}", self
        );
    }
}

/// A boolean attempt reported `false` or raised an error that was swallowed.
///
/// # Log Level
/// `debug!` - Detailed diagnostic information
pub struct RetryAttemptRejected<'a> {
    pub attempt: u32,
    pub max_attempts: u32,
    pub error: Option<&'a dyn Display>,
}

impl Display for RetryAttemptRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self.error {
            Some(error) => write!(
                f,
                "attempt {}/{} raised an error (ignored): {}",
                self.attempt, self.max_attempts, error
            ),
            None => write!(
                f,
                "attempt {}/{} returned false",
                self.attempt, self.max_attempts
            ),
        }
    }
}

impl StructuredLog for RetryAttemptRejected<'_> {
    fn log(&self) {
        tracing::debug!(
            attempt = self.attempt,
            max_attempts = self.max_attempts,
            "{}", self
        );
    }
}
