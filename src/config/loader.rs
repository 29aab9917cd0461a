// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::config::consts::{
    DEFAULT_LOG_FILTER, DEFAULT_PERSISTENCE_RETRY_INTERVAL_MS, DEFAULT_PERSISTENCE_RETRY_TIMES,
};
use crate::errors::ConfigError;
use crate::utils::RetrySettings;

/// Worker configuration.
///
/// Every field is optional in the file; missing fields take the defaults from
/// [`consts`](crate::config::consts). The format follows the file extension:
/// `.yaml`/`.yml` or `.toml`.
///
/// # Fields
/// * `log_filter` - Default tracing directive, overridden by `RUST_LOG`
/// * `max_concurrency` - Upper bound on concurrently running tasks (unbounded when absent)
/// * `persistence_retry_times` - Attempts made when loading results for the last task
/// * `persistence_retry_interval_ms` - Pause between those attempts
/// * `enable_component_container` - Consult the component container before the registry
///
/// # Example
/// ```yaml
/// log_filter: "the_taskrunner=debug"
/// max_concurrency: 8
/// persistence_retry_times: 5
/// persistence_retry_interval_ms: 200
/// enable_component_container: true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WorkerConfig {
    pub log_filter: String,
    pub max_concurrency: Option<usize>,
    pub persistence_retry_times: u32,
    pub persistence_retry_interval_ms: u64,
    pub enable_component_container: bool,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            max_concurrency: None,
            persistence_retry_times: DEFAULT_PERSISTENCE_RETRY_TIMES,
            persistence_retry_interval_ms: DEFAULT_PERSISTENCE_RETRY_INTERVAL_MS,
            enable_component_container: false,
        }
    }
}

impl WorkerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "log_filter",
                reason: "must not be empty".to_string(),
            });
        }
        if self.max_concurrency == Some(0) {
            return Err(ConfigError::Invalid {
                field: "max_concurrency",
                reason: "must be at least 1 when set".to_string(),
            });
        }
        if self.persistence_retry_times == 0 {
            return Err(ConfigError::Invalid {
                field: "persistence_retry_times",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    pub fn persistence_retry(&self) -> RetrySettings {
        RetrySettings::new(
            self.persistence_retry_times,
            Duration::from_millis(self.persistence_retry_interval_ms),
        )
    }
}

enum Format {
    Yaml,
    Toml,
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<WorkerConfig, ConfigError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let format = match extension.as_deref() {
        Some("yaml") | Some("yml") => Format::Yaml,
        Some("toml") => Format::Toml,
        _ => {
            return Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            })
        }
    };

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let cfg = match format {
        Format::Yaml => serde_yaml::from_str(&content)?,
        Format::Toml => toml::from_str(&content)?,
    };
    Ok(cfg)
}

pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<WorkerConfig, ConfigError> {
    let cfg = load_config(path)?;
    cfg.validate()?;
    Ok(cfg)
}
