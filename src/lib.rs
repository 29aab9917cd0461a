// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod backends;    // built-in processors
pub mod config;      // worker config + runtime wiring
pub mod engine;      // task runner and dispatcher
pub mod errors;      // error handling
pub mod observability;
pub mod persistence; // instance results for fan-in
pub mod reporting;   // fire-and-forget tracker messages
pub mod resolver;    // processor lookup chain
pub mod task;        // assignments, context, results
pub mod traits;      // processor abstractions
pub mod utils;
