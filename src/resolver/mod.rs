// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Processor resolution.
//!
//! An assignment names its processor with a `ProcessorType` and an identifier
//! string. Resolution tries each strategy in order and the first hit wins:
//!
//! 1. the [`ComponentContainer`], when one is installed, looked up by name
//! 2. the [`ProcessorRegistry`] of named factories
//!
//! A container error is logged and resolution falls through. When nothing
//! matches the caller gets `None`; resolution never panics.

mod chain;
mod container;
mod registry;

pub use chain::{ChainedProcessorResolver, ProcessorResolver};
pub use container::{ComponentContainer, ComponentMap};
pub use registry::{ProcessorFactoryFn, ProcessorRegistry};
