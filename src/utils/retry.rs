// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Bounded retry for unreliable operations.
//!
//! Both helpers make at most `retry_times` attempts, waiting `interval` after
//! every failed one. A `retry_times` of 0 or 1, or a zero `interval`, means a
//! single attempt. The wait is a `tokio::time::sleep`, so it suspends only the
//! calling task.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;

use crate::observability::messages::retry::{RetryAttemptFailed, RetryAttemptRejected};
use crate::observability::messages::StructuredLog;

/// Attempt count and spacing for one retried operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetrySettings {
    pub times: u32,
    pub interval: Duration,
}

impl RetrySettings {
    pub fn new(times: u32, interval: Duration) -> Self {
        Self { times, interval }
    }

    /// Exactly one attempt
    pub fn once() -> Self {
        Self::new(1, Duration::ZERO)
    }

    fn is_single_attempt(&self) -> bool {
        self.times <= 1 || self.interval.is_zero()
    }
}

/// Run an operation that signals failure by returning `Err`.
///
/// Returns the first `Ok`. When every earlier attempt failed, the last attempt's
/// outcome is returned as-is, error included.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use the_taskrunner::utils::execute_with_retry;
///
/// # #[tokio::main]
/// # async fn main() {
/// let mut calls = 0;
/// let result: Result<u32, String> = execute_with_retry(
///     || {
///         calls += 1;
///         let attempt = calls;
///         async move { if attempt < 2 { Err("flaky".to_string()) } else { Ok(attempt) } }
///     },
///     3,
///     Duration::from_millis(1),
/// )
/// .await;
/// assert_eq!(result, Ok(2));
/// # }
/// ```
pub async fn execute_with_retry<T, E, F, Fut>(
    mut op: F,
    retry_times: u32,
    interval: Duration,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let settings = RetrySettings::new(retry_times, interval);
    if settings.is_single_attempt() {
        return op().await;
    }

    for attempt in 1..retry_times {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) => {
                RetryAttemptFailed {
                    attempt,
                    max_attempts: retry_times,
                    interval,
                    error: &e,
                }
                .log();
                sleep(interval).await;
            }
        }
    }

    op().await
}

/// Run an operation that signals failure by returning `Ok(false)`.
///
/// Returns `true` as soon as an attempt does. Errors count as failed attempts
/// and never abort the loop; an error on the last attempt yields `false`.
pub async fn execute_with_retry_v2<E, F, Fut>(mut op: F, retry_times: u32, interval: Duration) -> bool
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<bool, E>>,
    E: Display,
{
    let settings = RetrySettings::new(retry_times, interval);
    let max_attempts = retry_times.max(1);
    if settings.is_single_attempt() {
        return settle(op().await, 1, max_attempts);
    }

    for attempt in 1..retry_times {
        if settle(op().await, attempt, max_attempts) {
            return true;
        }
        sleep(interval).await;
    }

    settle(op().await, retry_times, max_attempts)
}

fn settle<E: Display>(outcome: Result<bool, E>, attempt: u32, max_attempts: u32) -> bool {
    match outcome {
        Ok(true) => true,
        Ok(false) => {
            RetryAttemptRejected {
                attempt,
                max_attempts,
                error: None,
            }
            .log();
            false
        }
        Err(e) => {
            RetryAttemptRejected {
                attempt,
                max_attempts,
                error: Some(&e as &dyn Display),
            }
            .log();
            false
        }
    }
}
