// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! Log events are message structs with a `Display` implementation and a
//! [`StructuredLog`](messages::StructuredLog) implementation, so log text and
//! structured fields are defined in one place instead of being scattered
//! through the engine as format strings.
//!
//! # Usage
//!
//! ```rust
//! use the_taskrunner::observability::messages::{task::TaskReceived, StructuredLog};
//!
//! TaskReceived {
//!     instance_id: "1024",
//!     task_id: "17",
//!     task_name: "SIMPLE",
//!     processor_info: "echo",
//! }
//! .log();
//! ```

pub mod messages;

use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber.
///
/// `RUST_LOG` takes precedence over `default_filter` when it is set.
pub fn init_tracing(default_filter: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}
