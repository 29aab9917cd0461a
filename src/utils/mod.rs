// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod panic;
pub mod retry;

pub use panic::panic_message;
pub use retry::{execute_with_retry, execute_with_retry_v2, RetrySettings};
