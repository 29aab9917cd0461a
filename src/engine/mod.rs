// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod dispatcher;
pub mod runner;
pub mod runtime;

pub use dispatcher::TaskDispatcher;
pub use runner::ProcessorRunner;
pub use runtime::WorkerRuntime;
