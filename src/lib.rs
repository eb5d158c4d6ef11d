//! FFmpeg-backed media conversion for chat bots.
//!
//! This crate provides:
//!
//! - [`MediaConverter`]: a value type that stages byte buffers through a
//!   scratch directory and runs `ffmpeg` over them with a wall-clock
//!   budget
//! - [`AudioProfile`]: the two audio targets bots send, stereo MP3 music
//!   and Opus push-to-talk voice notes
//! - [`MediaConverter::sticker_to_image`]: WebP sticker to PNG, with an
//!   error message safe to relay back to a chat
//! - [`ToolCommand`]: async execution of an external binary with captured
//!   output and a timeout
//!
//! Construct one [`MediaConverter`] near process startup and clone it
//! wherever conversions happen; there are no globals.
//!
//! # Example
//!
//! ```no_run
//! use botmedia::{ConverterConfig, MediaConverter};
//!
//! # async fn run() -> botmedia::Result<()> {
//! let converter = MediaConverter::new(&ConverterConfig::default())?;
//! let clip = std::fs::read("clip.wav")?;
//! let voice_note = converter.to_ptt(&clip, "wav").await?;
//! # Ok(())
//! # }
//! ```

pub mod command;
pub mod config;
pub mod convert;
mod error;
pub mod scratch;
pub mod tools;

pub use command::{ToolCommand, ToolOutput};
pub use config::ConverterConfig;
pub use convert::{AudioProfile, MediaConverter};
pub use error::{Error, Result};
pub use scratch::ScratchDir;
pub use tools::{ffmpeg_info, ToolInfo};
