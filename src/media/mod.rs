// SPDX-License-Identifier: MPL-2.0
//! Loading uploaded images into displayable previews.

use crate::error::{DecodeError, Result};
use iced::widget::image;
use std::path::Path;

/// Longest edge of an upload preview, in pixels. Uploads can be arbitrarily
/// large; the preview only has to be recognizable next to the result text.
pub const MAX_PREVIEW_EDGE: u32 = 320;

/// File extensions accepted by the upload path. This is the desktop analogue
/// of the browser's `image/*` MIME gate: anything else is rejected before a
/// decode is attempted.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// A decoded, display-ready preview of an uploaded image.
#[derive(Debug, Clone)]
pub struct ImagePreview {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImagePreview {
    /// Creates a preview from raw RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }
}

/// Returns true when the path's extension names a supported image format.
#[must_use]
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

/// Loads an image file and builds a bounded-size preview for the result card.
///
/// # Errors
///
/// Returns `Error::Decode(DecodeError::InvalidImage)` when the file cannot
/// be opened or parsed as an image.
pub fn load_preview(path: &Path) -> Result<ImagePreview> {
    let img = image_rs::open(path).map_err(|err| DecodeError::InvalidImage(err.to_string()))?;

    let thumb = img.thumbnail(MAX_PREVIEW_EDGE, MAX_PREVIEW_EDGE);
    let rgba = thumb.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(ImagePreview::from_rgba(width, height, rgba.into_raw()))
}
