//! Scratch directory for staging conversion inputs and outputs.
//!
//! Staged files are named `{millis}-{random}{role}.{ext}` so concurrent
//! conversions never collide, and each one is handed out as a
//! [`TempPath`] that unlinks the file when dropped. Deletion is
//! best-effort: a failed unlink is discarded.

use std::path::{Path, PathBuf};

use chrono::Utc;
use tempfile::TempPath;

use crate::error::Result;

/// A directory for conversion temp files, created on demand.
#[derive(Debug, Clone)]
pub struct ScratchDir {
    root: PathBuf,
}

impl ScratchDir {
    /// Use the given directory as scratch space.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        ScratchDir { root: root.into() }
    }

    /// Default scratch location under the system temp directory.
    pub fn default_path() -> PathBuf {
        std::env::temp_dir().join("botmedia")
    }

    /// The scratch directory root.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Create the directory (and any missing parents). Calling this when
    /// the directory already exists is a no-op.
    pub fn ensure(&self) -> Result<()> {
        std::fs::create_dir_all(&self.root)?;
        Ok(())
    }

    /// Stage an input file with the given extension.
    pub(crate) fn stage(&self, ext: &str) -> Result<TempPath> {
        self.stage_with("", ext)
    }

    /// Stage an output file with the given extension.
    pub(crate) fn stage_output(&self, ext: &str) -> Result<TempPath> {
        self.stage_with("-out", ext)
    }

    fn stage_with(&self, role: &str, ext: &str) -> Result<TempPath> {
        let prefix = format!("{}-", Utc::now().timestamp_millis());
        let suffix = format!("{role}.{ext}");
        let file = tempfile::Builder::new()
            .prefix(&prefix)
            .suffix(&suffix)
            .tempfile_in(&self.root)?;
        Ok(file.into_temp_path())
    }
}
