//! Discovery of the external `ffmpeg` binary.
//!
//! Resolution order: an explicit configured path wins when it points at an
//! existing file, otherwise the binary is looked up on `PATH`.

use std::path::{Path, PathBuf};
use std::process::Command;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const FFMPEG: &str = "ffmpeg";

/// Diagnostic snapshot of the converter binary, suitable for a health
/// endpoint or startup log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    /// Binary name.
    pub name: String,
    /// Whether the binary was found.
    pub available: bool,
    /// First line of `ffmpeg -version` output, when available.
    pub version: Option<String>,
    /// Resolved filesystem path, when available.
    pub path: Option<PathBuf>,
}

/// Locate the `ffmpeg` binary.
pub fn resolve_ffmpeg(override_path: Option<&Path>) -> Result<PathBuf> {
    resolve_tool(FFMPEG, override_path)
}

fn resolve_tool(name: &str, override_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = override_path {
        if path.exists() {
            return Ok(path.to_path_buf());
        }
        tracing::debug!(
            "configured {} path {} does not exist, falling back to PATH lookup",
            name,
            path.display()
        );
    }
    which::which(name).map_err(|_| Error::launch(name, "not found; is it installed and in PATH?"))
}

/// Probe the `ffmpeg` binary and report what was found.
pub fn ffmpeg_info(override_path: Option<&Path>) -> ToolInfo {
    match resolve_ffmpeg(override_path) {
        Ok(path) => {
            let version = detect_version(&path);
            ToolInfo {
                name: FFMPEG.to_string(),
                available: true,
                version,
                path: Some(path),
            }
        }
        Err(_) => ToolInfo {
            name: FFMPEG.to_string(),
            available: false,
            version: None,
            path: None,
        },
    }
}

fn detect_version(path: &Path) -> Option<String> {
    let output = Command::new(path).arg("-version").output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .next()
        .map(|s| s.to_string())
}
