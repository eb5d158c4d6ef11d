//! The conversion pipeline.
//!
//! [`MediaConverter`] owns a resolved `ffmpeg` path and a scratch
//! directory. Construct it once near process startup and hand out clones;
//! it carries no shared mutable state.

mod audio;
mod sticker;

pub use audio::AudioProfile;

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::command::ToolCommand;
use crate::config::ConverterConfig;
use crate::error::Result;
use crate::scratch::ScratchDir;
use crate::tools;

/// FFmpeg-backed media converter.
#[derive(Debug, Clone)]
pub struct MediaConverter {
    ffmpeg: PathBuf,
    scratch: ScratchDir,
    timeout: Duration,
}

impl MediaConverter {
    /// Resolve `ffmpeg`, prepare the scratch directory, and build a
    /// converter. Fails early if the binary cannot be found.
    pub fn new(config: &ConverterConfig) -> Result<Self> {
        let ffmpeg = tools::resolve_ffmpeg(config.ffmpeg_path.as_deref())?;
        let scratch = match &config.scratch_dir {
            Some(dir) => ScratchDir::new(dir),
            None => ScratchDir::new(ScratchDir::default_path()),
        };
        scratch.ensure()?;
        tracing::debug!(
            "converter ready: ffmpeg at {}, scratch at {}",
            ffmpeg.display(),
            scratch.path().display()
        );
        Ok(MediaConverter {
            ffmpeg,
            scratch,
            timeout: config.timeout(),
        })
    }

    /// Path of the resolved `ffmpeg` binary.
    pub fn ffmpeg_path(&self) -> &Path {
        &self.ffmpeg
    }

    /// Directory where conversion temp files are staged.
    pub fn scratch_dir(&self) -> &Path {
        self.scratch.path()
    }

    /// Wall-clock budget for a single conversion.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run one ffmpeg conversion over an in-memory buffer.
    ///
    /// The input bytes are staged to a file with `source_ext`, ffmpeg runs
    /// as `ffmpeg -y -i <input> <codec_args..> <output>`, and the output
    /// file with `target_ext` is read back. Both staged files are deleted
    /// whether the run succeeds, fails, or times out.
    pub async fn convert(
        &self,
        input: &[u8],
        codec_args: &[&str],
        source_ext: &str,
        target_ext: &str,
    ) -> Result<Vec<u8>> {
        self.scratch.ensure()?;
        let input_path = self.scratch.stage(source_ext)?;
        let output_path = self.scratch.stage_output(target_ext)?;
        // Both paths unlink on drop, so every return below leaves the
        // scratch directory clean.

        tokio::fs::write(&input_path, input).await?;

        let mut cmd = ToolCommand::new(&self.ffmpeg);
        cmd.timeout(self.timeout)
            .args(["-y", "-i"])
            .arg(input_path.to_string_lossy())
            .args(codec_args.iter().copied())
            .arg(output_path.to_string_lossy());
        cmd.execute().await?;

        let output = tokio::fs::read(&output_path).await?;
        tracing::debug!(
            "converted {} bytes of {source_ext} to {} bytes of {target_ext}",
            input.len(),
            output.len()
        );
        Ok(output)
    }
}
