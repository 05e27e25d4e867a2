// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! WAL configuration
//!
//! Loaded from TOML:
//!
//! ```toml
//! root = "wal"
//! rotation_threshold_bytes = 1073741824
//! ```
//!
//! A relative `root` is resolved against the directory holding the file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Partition size (1 GiB) past which a rotation warning is emitted
pub const DEFAULT_ROTATION_THRESHOLD_BYTES: u64 = 1024 * 1024 * 1024;

/// Errors that can occur loading WAL configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read WAL config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid WAL config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("WAL root directory must not be empty")]
    EmptyRoot,
    #[error("rotation_threshold_bytes must be greater than zero")]
    ZeroThreshold,
}

/// Configuration for a [`FileWal`](crate::FileWal)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WalConfig {
    /// Directory owning every partition file
    pub root: PathBuf,
    /// Partition size in bytes that triggers the one-time rotation warning
    #[serde(default = "default_rotation_threshold")]
    pub rotation_threshold_bytes: u64,
}

fn default_rotation_threshold() -> u64 {
    DEFAULT_ROTATION_THRESHOLD_BYTES
}

impl WalConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            rotation_threshold_bytes: DEFAULT_ROTATION_THRESHOLD_BYTES,
        }
    }

    pub fn with_rotation_threshold(mut self, bytes: u64) -> Self {
        self.rotation_threshold_bytes = bytes;
        self
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: WalConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&content)?;
        if config.root.is_relative() {
            if let Some(dir) = path.parent() {
                config.root = dir.join(&config.root);
            }
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.root.as_os_str().is_empty() {
            return Err(ConfigError::EmptyRoot);
        }
        if self.rotation_threshold_bytes == 0 {
            return Err(ConfigError::ZeroThreshold);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
