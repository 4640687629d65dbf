//! Grayscale transform
//!
//! Converts an RGBA frame to a uniform-luminance frame: each pixel's four
//! channels are replaced by its luminance value. Applying the transform a
//! second time is a fixed point, since the integer luma weights sum to one.

use tracing::debug;

use crate::frame_pipeline::common::error::Result;
use crate::frame_pipeline::frame::types::RgbaFrame;
use crate::frame_pipeline::transform::luma::{broadcast_plane, luma_plane};
use crate::frame_pipeline::transform::pixel_transform::PixelTransform;

pub struct GrayscaleTransform;

impl PixelTransform for GrayscaleTransform {
    fn apply(&self, frame: &RgbaFrame<'_>) -> Result<Vec<u8>> {
        debug!(
            "Converting {}x{} frame to grayscale",
            frame.width(),
            frame.height()
        );

        let plane = luma_plane(frame)?;
        Ok(broadcast_plane(&plane))
    }
}
