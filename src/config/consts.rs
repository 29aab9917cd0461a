// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Default tracing directive; `RUST_LOG` takes precedence
pub const DEFAULT_LOG_FILTER: &str = "the_taskrunner=info";
/// Attempts made when loading the instance's results for the last task
pub const DEFAULT_PERSISTENCE_RETRY_TIMES: u32 = 3;
/// Pause between those attempts, in milliseconds
pub const DEFAULT_PERSISTENCE_RETRY_INTERVAL_MS: u64 = 100;
