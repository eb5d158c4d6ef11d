//! Unified error type for the converter library.
//!
//! Every failure a conversion can hit funnels into [`Error`]: the external
//! binary could not be started, it ran and failed, it overran its wall-clock
//! budget, or the temp-file I/O around it broke. Cleanup failures never show
//! up here at all; temp files are removed best-effort and a failed unlink is
//! discarded rather than allowed to mask the primary outcome.

use std::time::Duration;

/// Result alias using the crate-level [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the conversion pipeline.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The converter binary could not be located or started.
    #[error("failed to launch {tool}: {message}")]
    Launch {
        /// Name of the binary that failed to start.
        tool: String,
        /// Human-readable description of the launch failure.
        message: String,
    },

    /// The converter ran but exited unsuccessfully.
    #[error("{tool} exited with {}: {stderr}", exit_code_label(.exit_code))]
    Conversion {
        /// Name of the binary that failed.
        tool: String,
        /// Process exit code; `None` when the process died to a signal.
        exit_code: Option<i32>,
        /// Captured standard-error text.
        stderr: String,
    },

    /// The converter exceeded its wall-clock budget and was terminated.
    #[error("{tool} timed out after {timeout:?}")]
    Timeout {
        /// Name of the binary that was killed.
        tool: String,
        /// The budget that was exceeded.
        timeout: Duration,
    },

    /// Temp-file I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Sticker conversion failed. The underlying diagnostic is written to
    /// the log, not carried here.
    #[error("failed to convert sticker to image")]
    Sticker,

    /// Configuration could not be parsed.
    #[error("invalid config: {0}")]
    Config(String),
}

fn exit_code_label(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("code {c}"),
        None => "signal".to_string(),
    }
}

impl Error {
    /// Convenience constructor for [`Error::Launch`].
    pub fn launch(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Launch {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// Convenience constructor for [`Error::Conversion`].
    pub fn conversion(
        tool: impl Into<String>,
        exit_code: Option<i32>,
        stderr: impl Into<String>,
    ) -> Self {
        Error::Conversion {
            tool: tool.into(),
            exit_code,
            stderr: stderr.into(),
        }
    }

    /// Convenience constructor for [`Error::Timeout`].
    pub fn timeout(tool: impl Into<String>, timeout: Duration) -> Self {
        Error::Timeout {
            tool: tool.into(),
            timeout,
        }
    }
}
