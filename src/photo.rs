//! Photo normalization for stored entries.
//!
//! Attached photos are rescaled so the shorter side is exactly
//! [`PHOTO_SHORT_EDGE`] pixels, preserving aspect ratio, and re-encoded as
//! PNG. The rescale runs in both directions: an image smaller than the
//! target on its short side is scaled *up*. This is a normalization of the
//! stored representation, not a size cap.

use crate::constants::PHOTO_SHORT_EDGE;
use crate::errors::PhotoError;
use image::{imageops::FilterType, GenericImageView, ImageFormat};
use std::fmt;
use std::io::Cursor;

/// A photo in its normalized stored form: PNG bytes whose shorter side is
/// [`PHOTO_SHORT_EDGE`] pixels.
///
/// Construct with [`Photo::from_bytes`], which accepts any image format the
/// `image` crate can decode and performs the rescale. Photos read back from
/// storage skip the rescale (they were normalized when first attached) and
/// go through [`Photo::from_stored`] instead.
#[derive(Clone)]
pub struct Photo {
    bytes: Vec<u8>,
    width: u32,
    height: u32,
}

impl Photo {
    /// Decodes `data`, rescales it so the shorter side equals
    /// [`PHOTO_SHORT_EDGE`], and re-encodes as PNG.
    ///
    /// The scale ratio is `PHOTO_SHORT_EDGE / min(width, height)`, applied to
    /// both dimensions. An image already at the target short edge is kept at
    /// its dimensions but still re-encoded to the canonical PNG form.
    ///
    /// # Errors
    ///
    /// Returns `PhotoError::Decode` for undecodable input,
    /// `PhotoError::EmptyImage` for a zero-area image, and
    /// `PhotoError::Encode` if PNG encoding fails.
    pub fn from_bytes(data: &[u8]) -> Result<Self, PhotoError> {
        let source = image::load_from_memory(data).map_err(PhotoError::Decode)?;
        let (width, height) = source.dimensions();
        if width == 0 || height == 0 {
            return Err(PhotoError::EmptyImage { width, height });
        }

        let shorter = width.min(height);
        let ratio = f64::from(PHOTO_SHORT_EDGE) / f64::from(shorter);
        let target_width = (f64::from(width) * ratio).round() as u32;
        let target_height = (f64::from(height) * ratio).round() as u32;

        let scaled = if (target_width, target_height) == (width, height) {
            source
        } else {
            source.resize_exact(target_width, target_height, FilterType::Lanczos3)
        };

        let mut bytes = Vec::new();
        scaled
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .map_err(PhotoError::Encode)?;

        Ok(Photo {
            bytes,
            width: target_width,
            height: target_height,
        })
    }

    /// Wraps already-normalized PNG bytes read back from a record, decoding
    /// only to validate them and recover dimensions.
    pub(crate) fn from_stored(bytes: Vec<u8>) -> Result<Self, image::ImageError> {
        let decoded = image::load_from_memory(&bytes)?;
        let (width, height) = decoded.dimensions();
        Ok(Photo {
            bytes,
            width,
            height,
        })
    }

    /// The normalized dimensions, `(width, height)` in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// The stored PNG bytes.
    pub fn as_png_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl PartialEq for Photo {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl fmt::Debug for Photo {
    // Dimensions and size only; the pixel data is noise in logs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Photo")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &format_args!("{} bytes", self.bytes.len()))
            .finish()
    }
}
