// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod loader;
mod runtime;

pub mod consts;

pub use loader::{load_and_validate_config, load_config, WorkerConfig};
pub use runtime::RuntimeBuilder;
