//! Frame processing pipeline module
//!
//! This module provides a structured approach to camera-frame transforms,
//! with separate modules for frame validation, pixel transforms, and
//! processing orchestration.

pub mod frame;
pub mod transform;
pub mod processing;
pub mod common;

pub use common::{
    ProcessError,
    Result,
};

pub use frame::{
    FRAME_CHANNELS,
    FrameDimensions,
    RgbaFrame,
    frame_matches_dimensions,
};

pub use transform::{
    PixelTransform,
    GrayscaleTransform,
    EdgeTransform,
};

pub use processing::{
    FrameMode,
    FrameProcessor,
    ProcessorConfig,
    ProcessorConfigBuilder,
    process_frame_to_gray,
    process_frame_to_edges,
};
