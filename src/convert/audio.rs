//! Audio conversion targets.

use super::MediaConverter;
use crate::error::Result;

/// Encoding target for an audio conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioProfile {
    /// Stereo MP3 at 128 kbit/s, 44.1 kHz. Plays anywhere.
    Music,
    /// Opus with variable bitrate and maximum compression effort, the
    /// format chat clients expect for push-to-talk voice notes.
    Voice,
}

impl AudioProfile {
    /// The ffmpeg arguments for this target, inserted between input and
    /// output on the command line.
    pub fn codec_args(&self) -> &'static [&'static str] {
        match self {
            AudioProfile::Music => &[
                "-vn", "-ac", "2", "-b:a", "128k", "-ar", "44100", "-f", "mp3",
            ],
            AudioProfile::Voice => &[
                "-vn",
                "-c:a",
                "libopus",
                "-b:a",
                "128k",
                "-vbr",
                "on",
                "-compression_level",
                "10",
            ],
        }
    }

    /// File extension of the produced container.
    pub fn extension(&self) -> &'static str {
        match self {
            AudioProfile::Music => "mp3",
            AudioProfile::Voice => "opus",
        }
    }
}

impl MediaConverter {
    /// Convert an audio buffer to stereo MP3 ([`AudioProfile::Music`]).
    pub async fn to_audio(&self, input: &[u8], source_ext: &str) -> Result<Vec<u8>> {
        self.encode(AudioProfile::Music, input, source_ext).await
    }

    /// Convert an audio buffer to an Opus voice note
    /// ([`AudioProfile::Voice`]).
    pub async fn to_ptt(&self, input: &[u8], source_ext: &str) -> Result<Vec<u8>> {
        self.encode(AudioProfile::Voice, input, source_ext).await
    }

    async fn encode(
        &self,
        profile: AudioProfile,
        input: &[u8],
        source_ext: &str,
    ) -> Result<Vec<u8>> {
        let ext = profile.extension();
        tracing::info!(
            "audio convert ({source_ext} -> {ext}), {} bytes in",
            input.len()
        );
        self.convert(input, profile.codec_args(), source_ext, ext)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn music_profile_targets_mp3() {
        let args = AudioProfile::Music.codec_args();
        assert_eq!(args[0], "-vn");
        assert!(args.windows(2).any(|w| w == ["-f", "mp3"]));
        assert!(args.windows(2).any(|w| w == ["-ar", "44100"]));
        assert_eq!(AudioProfile::Music.extension(), "mp3");
    }

    #[test]
    fn voice_profile_targets_opus() {
        let args = AudioProfile::Voice.codec_args();
        assert!(args.windows(2).any(|w| w == ["-c:a", "libopus"]));
        assert!(args.windows(2).any(|w| w == ["-vbr", "on"]));
        assert!(args.windows(2).any(|w| w == ["-compression_level", "10"]));
        assert_eq!(AudioProfile::Voice.extension(), "opus");
    }
}
