// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Processor implementations shipped with the worker.
//!
//! # Available Backends
//!
//! ## Local Backend
//! In-process Rust processors, one per execution model:
//! - **echo**: Standalone, echoes its payload
//! - **word_count**: Map-reduce, maps lines to child tasks and sums the counts
//! - **host_probe**: Broadcast, every node reports its host name
//!
//! Register them with [`local::LocalProcessorFactory::register_builtins`].
//!
//! ## Stub Backend (Test-Only)
//! Testing utilities for engine development (only available in test builds):
//! - **StubProcessor**: Succeeds in every phase and implements every capability
//! - **FailingProcessor**: Returns an error from `process`
//! - **PanickingProcessor**: Panics inside `process`

pub mod local;
#[cfg(test)]
pub mod stub;
