// SPDX-License-Identifier: MPL-2.0
//! Thin wrapper over the external QR decode capability (`rqrr`).
//!
//! The rest of the crate treats decoding as opaque: grayscale pixels in,
//! decoded text or a [`DecodeError`] out. Nothing here understands QR
//! internals.

use crate::error::DecodeError;
use crate::media;
use std::path::Path;

/// Attempts to decode a QR symbol from 8-bit grayscale pixels.
///
/// When several symbols are present the first one that decodes cleanly wins,
/// matching the single-result contract of the scan session.
///
/// # Errors
///
/// `DecodeError::NoSymbol` when no grid is detected, `DecodeError::Unreadable`
/// when grids are found but none yields a payload.
pub fn decode_luma(width: u32, height: u32, luma: &[u8]) -> Result<String, DecodeError> {
    debug_assert_eq!(luma.len(), (width * height) as usize);

    let w = width as usize;
    let mut prepared =
        rqrr::PreparedImage::prepare_from_greyscale(w, height as usize, |x, y| luma[y * w + x]);

    let grids = prepared.detect_grids();
    if grids.is_empty() {
        return Err(DecodeError::NoSymbol);
    }

    let mut last_error = None;
    for grid in grids {
        match grid.decode() {
            Ok((_meta, content)) => return Ok(content),
            Err(err) => last_error = Some(err),
        }
    }

    Err(DecodeError::Unreadable(
        last_error.map(|err| err.to_string()).unwrap_or_default(),
    ))
}

/// One-shot decode of an image file, used by the upload path.
///
/// # Errors
///
/// `DecodeError::NotAnImage` for files whose type is not an image type (no
/// decode is attempted), `DecodeError::InvalidImage` when the bytes cannot
/// be parsed, plus the [`decode_luma`] failures.
pub fn scan_image_file(path: &Path) -> Result<String, DecodeError> {
    if !media::is_image_file(path) {
        return Err(DecodeError::NotAnImage);
    }

    let img = image_rs::open(path).map_err(|err| DecodeError::InvalidImage(err.to_string()))?;
    let luma = img.to_luma8();
    let (width, height) = luma.dimensions();
    decode_luma(width, height, luma.as_raw())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    /// Rasterizes `text` as a QR symbol: one byte per pixel, `scale` pixels
    /// per module, with a four-module quiet zone.
    fn qr_luma(text: &str, scale: usize) -> (u32, u32, Vec<u8>) {
        let code = qrcode::QrCode::new(text.as_bytes()).expect("encode qr");
        let modules = code.width();
        let quiet = 4;
        let edge = (modules + 2 * quiet) * scale;
        let mut pixels = vec![255u8; edge * edge];

        let colors = code.to_colors();
        for (i, color) in colors.iter().enumerate() {
            if *color == qrcode::Color::Dark {
                let mx = i % modules;
                let my = i / modules;
                for dy in 0..scale {
                    for dx in 0..scale {
                        let px = (quiet + mx) * scale + dx;
                        let py = (quiet + my) * scale + dy;
                        pixels[py * edge + px] = 0;
                    }
                }
            }
        }
        (edge as u32, edge as u32, pixels)
    }

    #[test]
    fn decode_luma_reads_generated_symbol() {
        let (w, h, pixels) = qr_luma("HELLO", 4);
        let content = decode_luma(w, h, &pixels).expect("decode");
        assert_eq!(content, "HELLO");
    }

    #[test]
    fn decode_luma_reports_no_symbol_on_blank_image() {
        let pixels = vec![255u8; 64 * 64];
        assert_eq!(decode_luma(64, 64, &pixels), Err(DecodeError::NoSymbol));
    }

    #[test]
    fn scan_image_file_rejects_non_image_extension() {
        assert_eq!(
            scan_image_file(Path::new("payload.txt")),
            Err(DecodeError::NotAnImage)
        );
    }

    #[test]
    fn scan_image_file_decodes_qr_png() {
        let (w, h, pixels) = qr_luma("https://example.com", 4);
        let img = image_rs::GrayImage::from_raw(w, h, pixels).expect("image");

        let temp_dir = tempdir().expect("temp dir");
        let path = temp_dir.path().join("qr.png");
        img.save(&path).expect("write png");

        let content = scan_image_file(&path).expect("decode");
        assert_eq!(content, "https://example.com");
    }

    #[test]
    fn scan_image_file_fails_on_symbol_free_image() {
        let img = image_rs::GrayImage::from_pixel(48, 48, image_rs::Luma([200u8]));
        let temp_dir = tempdir().expect("temp dir");
        let path = temp_dir.path().join("plain.png");
        img.save(&path).expect("write png");

        assert_eq!(scan_image_file(&path), Err(DecodeError::NoSymbol));
    }
}
