use crate::frame_pipeline::common::error::Result;
use crate::frame_pipeline::frame::types::RgbaFrame;

pub trait PixelTransform {
    /// Produces a new RGBA buffer of the same byte length as the frame.
    fn apply(&self, frame: &RgbaFrame<'_>) -> Result<Vec<u8>>;
}
