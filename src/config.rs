//! Converter configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Configuration for [`MediaConverter`](crate::MediaConverter).
///
/// All fields have sensible defaults: with `ConverterConfig::default()` the
/// converter looks up `ffmpeg` on `PATH`, stages temp files under the
/// system temp directory, and gives each run a 30 second budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Explicit path to the `ffmpeg` binary. When unset (or pointing at a
    /// file that does not exist) the binary is looked up on `PATH`.
    pub ffmpeg_path: Option<PathBuf>,

    /// Directory for staging conversion inputs and outputs. Created on
    /// demand. Defaults to a subdirectory of the system temp directory.
    pub scratch_dir: Option<PathBuf>,

    /// Wall-clock budget for a single conversion, in seconds.
    pub timeout_secs: u64,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        ConverterConfig {
            ffmpeg_path: None,
            scratch_dir: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

impl ConverterConfig {
    /// Parse a config from a JSON string. Missing fields take defaults.
    ///
    /// This is intentionally string-based so the caller can read the file
    /// however it sees fit (async, embedded, etc.).
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load configuration from a file path, falling back to defaults if the
    /// path is `None`, the file does not exist, or it fails to parse.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_json(&contents).unwrap_or_else(|e| {
                tracing::warn!("failed to parse config file {}: {e}", path.display());
                Self::default()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("no config file at {}; using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                tracing::warn!("failed to read config file {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// The per-conversion budget as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
