// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod worker;

pub use config::ConfigError;
pub use worker::WorkerError;
