//! Sticker to image conversion.

use super::MediaConverter;
use crate::error::{Error, Result};

impl MediaConverter {
    /// Convert a WebP sticker to a PNG image.
    ///
    /// No codec arguments are passed; ffmpeg detects the input container
    /// and picks the PNG encoder from the output extension. On failure the
    /// underlying diagnostic goes to the log and the caller gets the
    /// deliberately generic [`Error::Sticker`], which is safe to relay
    /// back to a chat.
    pub async fn sticker_to_image(&self, sticker: &[u8]) -> Result<Vec<u8>> {
        tracing::info!("sticker convert (webp -> png), {} bytes in", sticker.len());
        match self.convert(sticker, &[], "webp", "png").await {
            Ok(image) => Ok(image),
            Err(err) => {
                tracing::error!("sticker conversion failed: {err}");
                Err(Error::Sticker)
            }
        }
    }
}
