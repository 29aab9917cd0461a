// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Task data model: the assignment handed over by the tracker, the per-execution
//! context given to processors, and the result they produce.

mod assignment;
mod context;
mod result;
mod types;
pub mod consts;

pub use assignment::TaskAssignment;
pub use context::TaskContext;
pub use result::ProcessResult;
pub use types::{ExecuteType, ProcessorType, TaskStatus};
