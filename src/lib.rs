//! Core frame-processing bridge for the edge viewer.
//!
//! Exposes two transforms over interleaved RGBA camera frames: grayscale
//! conversion and Canny edge extraction. Callers hand in a borrowed byte
//! buffer plus its dimensions and receive a newly allocated output buffer
//! of the same size.

pub mod frame_pipeline;
pub mod logger;
