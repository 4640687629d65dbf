//! Caller-facing bridge operations
//!
//! These two functions are the call surface handed to the managed layer
//! that owns the camera feed. They keep its long-standing error policy:
//! a buffer that does not match the declared dimensions is returned to the
//! caller as an unchanged copy instead of an error.
//!
//! NOTE: that policy means a caller supplying mismatched dimensions gets
//! back its own input and cannot tell a no-op "success" from a rejected
//! frame without comparing buffers. Callers that need the distinction
//! should use [`FrameProcessor::process`] directly, which reports the
//! mismatch as a typed error.

use tracing::warn;

use crate::frame_pipeline::processing::frame_processor::FrameProcessor;
use crate::frame_pipeline::processing::types::{FrameMode, ProcessorConfig};

/// Converts an RGBA frame to a uniform-luminance RGBA frame.
///
/// On length mismatch the input is returned unchanged.
pub fn process_frame_to_gray(input: &[u8], width: usize, height: usize) -> Vec<u8> {
    process_with(FrameMode::Grayscale, input, width, height)
}

/// Converts an RGBA frame to a binary edge-map RGBA frame.
///
/// On length mismatch the input is returned unchanged.
pub fn process_frame_to_edges(input: &[u8], width: usize, height: usize) -> Vec<u8> {
    process_with(FrameMode::Edges, input, width, height)
}

fn process_with(mode: FrameMode, input: &[u8], width: usize, height: usize) -> Vec<u8> {
    // Stateless per call: the processor owns nothing but its config and
    // two transform values, so building one here is cheap.
    let processor = FrameProcessor::new(ProcessorConfig::default());

    match processor.process(input, width, height, mode) {
        Ok(output) => output,
        Err(err) => {
            warn!(
                width,
                height,
                buffer_len = input.len(),
                %err,
                "Frame rejected, returning input unchanged"
            );
            input.to_vec()
        }
    }
}
