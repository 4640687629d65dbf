//! Frame processing orchestration module
//!
//! This module wires validation and the pixel transforms together and
//! carries the caller-facing bridge operations.

mod frame_processor;
mod bridge;
pub mod types;


pub use frame_processor::FrameProcessor;
pub use bridge::{process_frame_to_gray, process_frame_to_edges};
pub use types::{FrameMode, ProcessorConfig, ProcessorConfigBuilder};
