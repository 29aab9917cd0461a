// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while loading and validating worker configuration.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    /// The file extension does not map to a supported format
    #[error("unsupported config format for '{path}' (expected .yaml, .yml or .toml)")]
    UnsupportedFormat { path: PathBuf },

    /// A field holds a value the worker cannot run with
    #[error("invalid config value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}
