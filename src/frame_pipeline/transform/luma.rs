//! Shared luminance-plane helpers
//!
//! Both transforms reduce the RGBA frame to a single intensity plane and
//! broadcast a single plane back to four interleaved channels on the way
//! out. Luminance conversion delegates to the `image` crate's standard
//! integer-weighted luma reduction.

use image::{GrayImage, RgbaImage, imageops};

use crate::frame_pipeline::common::error::{ProcessError, Result};
use crate::frame_pipeline::frame::types::{FRAME_CHANNELS, RgbaFrame};

/// Reduces a validated RGBA frame to its luminance plane.
pub(crate) fn luma_plane(frame: &RgbaFrame<'_>) -> Result<GrayImage> {
    let rgba = RgbaImage::from_raw(
        frame.width() as u32,
        frame.height() as u32,
        frame.data().to_vec(),
    )
    .ok_or_else(|| {
        ProcessError::PixelConversionError(format!(
            "{}x{} buffer rejected by image container",
            frame.width(),
            frame.height()
        ))
    })?;

    Ok(imageops::grayscale(&rgba))
}

/// Broadcasts a single-channel plane into interleaved 4-channel output.
///
/// All four channels of each output pixel carry the plane value, alpha
/// included, so the output stays the same byte length as the RGBA input.
pub(crate) fn broadcast_plane(plane: &GrayImage) -> Vec<u8> {
    let mut rgba = Vec::with_capacity(plane.as_raw().len() * FRAME_CHANNELS);
    for &value in plane.as_raw() {
        rgba.extend_from_slice(&[value; FRAME_CHANNELS]);
    }
    rgba
}
