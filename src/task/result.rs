// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Outcome of one processor invocation: a success flag and a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResult {
    success: bool,
    msg: String,
}

impl ProcessResult {
    pub fn new(success: bool, msg: impl Into<String>) -> Self {
        Self {
            success,
            msg: msg.into(),
        }
    }

    pub fn success(msg: impl Into<String>) -> Self {
        Self::new(true, msg)
    }

    pub fn failure(msg: impl Into<String>) -> Self {
        Self::new(false, msg)
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn msg(&self) -> &str {
        &self.msg
    }
}

impl Display for ProcessResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let outcome = if self.success { "success" } else { "failure" };
        write!(f, "{}: {}", outcome, self.msg)
    }
}
