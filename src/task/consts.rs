// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Id of the fan-out trigger task of an instance
pub const ROOT_TASK_ID: &str = "0";
/// Id of the fan-in aggregator task of an instance
pub const LAST_TASK_ID: &str = "9999";

/// Reserved task names; processors may not map children under them
pub const ROOT_TASK_NAME: &str = "ROOT_TASK";
pub const LAST_TASK_NAME: &str = "LAST_TASK";

/// Terminal message reported when no processor could be resolved
pub const NO_PROCESSOR: &str = "NO_PROCESSOR";
