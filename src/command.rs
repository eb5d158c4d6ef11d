//! Async execution of the converter binary with a wall-clock budget.

use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};
use std::time::Duration;

use tokio::process::Command;
use tokio::time::timeout;

use crate::error::{Error, Result};

/// Default wall-clock budget for a single tool invocation.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Captured output of a completed tool run.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    /// Exit status as reported by the OS.
    pub status: ExitStatus,
    /// Standard output, lossily decoded as UTF-8.
    pub stdout: String,
    /// Standard error, lossily decoded as UTF-8.
    pub stderr: String,
}

/// Builder for a single external tool invocation.
///
/// The process runs with stdin closed and both output streams captured. A
/// run that overruns its budget is terminated and reported as
/// [`Error::Timeout`]; a run that exits non-zero is reported as
/// [`Error::Conversion`] carrying the captured stderr.
///
/// # Example
///
/// ```no_run
/// use botmedia::ToolCommand;
///
/// # async fn example() -> botmedia::Result<()> {
/// let output = ToolCommand::new("ffmpeg")
///     .arg("-version")
///     .execute()
///     .await?;
/// println!("{}", output.stdout);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ToolCommand {
    program: PathBuf,
    args: Vec<String>,
    timeout: Duration,
}

impl ToolCommand {
    /// Create a command for the given program with the default budget.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        ToolCommand {
            program: program.into(),
            args: Vec::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Append a single argument.
    pub fn arg(&mut self, arg: impl Into<String>) -> &mut Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args(&mut self, args: impl IntoIterator<Item = impl Into<String>>) -> &mut Self {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Override the wall-clock budget.
    pub fn timeout(&mut self, timeout: Duration) -> &mut Self {
        self.timeout = timeout;
        self
    }

    /// Run the command to completion and capture its output.
    ///
    /// # Errors
    ///
    /// - [`Error::Launch`] if the process cannot be spawned.
    /// - [`Error::Conversion`] if it exits with a non-zero status (captured
    ///   stderr attached).
    /// - [`Error::Timeout`] if it overruns its budget; the child is killed.
    /// - [`Error::Io`] if waiting on the process fails.
    pub async fn execute(&self) -> Result<ToolOutput> {
        let tool = self
            .program
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.program.to_string_lossy().to_string());

        tracing::debug!("running {} {}", self.program.display(), self.args.join(" "));

        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            // Never interactive.
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            // Dropping the wait future on timeout must also stop the child.
            .kill_on_drop(true);

        let child = cmd.spawn().map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::launch(tool.clone(), "no such executable"),
            _ => Error::launch(tool.clone(), format!("failed to spawn: {e}")),
        })?;

        match timeout(self.timeout, child.wait_with_output()).await {
            Ok(Ok(output)) => {
                let stdout = String::from_utf8_lossy(&output.stdout).to_string();
                let stderr = String::from_utf8_lossy(&output.stderr).to_string();
                if !output.status.success() {
                    tracing::debug!("{} failed: {}", tool, stderr.trim());
                    return Err(Error::conversion(tool, output.status.code(), stderr.trim()));
                }
                Ok(ToolOutput {
                    status: output.status,
                    stdout,
                    stderr,
                })
            }
            Ok(Err(e)) => Err(Error::Io(e)),
            Err(_) => Err(Error::timeout(tool, self.timeout)),
        }
    }
}
