//! Edge transform
//!
//! Reduces the frame to its luminance plane, runs Canny edge detection with
//! hysteresis thresholds, and broadcasts the binary edge map (255 on edges,
//! 0 elsewhere) back to four channels.

use imageproc::edges::canny;
use tracing::debug;

use crate::frame_pipeline::common::error::Result;
use crate::frame_pipeline::frame::types::RgbaFrame;
use crate::frame_pipeline::transform::luma::{broadcast_plane, luma_plane};
use crate::frame_pipeline::transform::pixel_transform::PixelTransform;

/// Default low hysteresis threshold on the 8-bit intensity scale.
pub const DEFAULT_LOW_THRESHOLD: f32 = 80.0;

/// Default high hysteresis threshold on the 8-bit intensity scale.
pub const DEFAULT_HIGH_THRESHOLD: f32 = 150.0;

pub struct EdgeTransform {
    low_threshold: f32,
    high_threshold: f32,
}

impl EdgeTransform {
    pub fn new() -> Self {
        Self::with_thresholds(DEFAULT_LOW_THRESHOLD, DEFAULT_HIGH_THRESHOLD)
    }

    /// Thresholds can be tuned; gradient magnitudes below `low` are never
    /// edges, above `high` always are, and the band between is kept only
    /// when connected to a strong edge.
    pub fn with_thresholds(low_threshold: f32, high_threshold: f32) -> Self {
        Self {
            low_threshold,
            high_threshold,
        }
    }

    pub fn low_threshold(&self) -> f32 {
        self.low_threshold
    }

    pub fn high_threshold(&self) -> f32 {
        self.high_threshold
    }
}

impl Default for EdgeTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl PixelTransform for EdgeTransform {
    fn apply(&self, frame: &RgbaFrame<'_>) -> Result<Vec<u8>> {
        debug!(
            "Extracting edges from {}x{} frame (low={}, high={})",
            frame.width(),
            frame.height(),
            self.low_threshold,
            self.high_threshold
        );

        let plane = luma_plane(frame)?;
        let edges = canny(&plane, self.low_threshold, self.high_threshold);
        Ok(broadcast_plane(&edges))
    }
}
