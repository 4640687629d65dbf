//! Pixel transform module
//!
//! This module provides the transform seam and the two fixed transforms the
//! bridge exposes: grayscale conversion and Canny edge extraction.

mod pixel_transform;
mod grayscale;
mod edges;
mod luma;

#[cfg(test)]
mod tests;

pub use pixel_transform::PixelTransform;
pub use grayscale::GrayscaleTransform;
pub use edges::{EdgeTransform, DEFAULT_LOW_THRESHOLD, DEFAULT_HIGH_THRESHOLD};
