use crate::frame_pipeline::frame::types::FrameDimensions;

/// Returns true iff `data` has exactly `width * height * 4` bytes.
///
/// This is the whole validation contract of the bridge: a buffer that
/// fails it is passed back to the caller untouched rather than rejected
/// with an error. See [`crate::frame_pipeline::processing`] for how that
/// policy plays out at the call surface.
pub fn frame_matches_dimensions(data: &[u8], width: usize, height: usize) -> bool {
    data.len() == FrameDimensions::new(width, height).byte_len()
}
