// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod echo;
pub mod host_probe;
pub mod word_count;

pub use echo::*;
pub use host_probe::*;
pub use word_count::*;
