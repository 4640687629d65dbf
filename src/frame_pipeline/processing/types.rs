//! Processing configuration types

use crate::frame_pipeline::transform::{DEFAULT_HIGH_THRESHOLD, DEFAULT_LOW_THRESHOLD};

/// Which transform a frame is run through, mirroring the viewer's
/// gray/edge display modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameMode {
    Grayscale,
    Edges,
}

/// Configuration for frame processing
#[derive(Debug, Clone)]
pub struct ProcessorConfig {
    /// Low hysteresis threshold for edge extraction
    pub edge_low_threshold: f32,
    /// High hysteresis threshold for edge extraction
    pub edge_high_threshold: f32,
    /// Whether to reject zero-sized dimensions before transforming
    pub validate_dimensions: bool,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            edge_low_threshold: DEFAULT_LOW_THRESHOLD,
            edge_high_threshold: DEFAULT_HIGH_THRESHOLD,
            validate_dimensions: true,
        }
    }
}

impl ProcessorConfig {
    pub fn builder() -> ProcessorConfigBuilder {
        ProcessorConfigBuilder::default()
    }
}

/// Builder for ProcessorConfig
#[derive(Default)]
pub struct ProcessorConfigBuilder {
    edge_low_threshold: Option<f32>,
    edge_high_threshold: Option<f32>,
    validate_dimensions: Option<bool>,
}

impl ProcessorConfigBuilder {
    pub fn edge_low_threshold(mut self, threshold: f32) -> Self {
        self.edge_low_threshold = Some(threshold);
        self
    }

    pub fn edge_high_threshold(mut self, threshold: f32) -> Self {
        self.edge_high_threshold = Some(threshold);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn build(self) -> ProcessorConfig {
        let default = ProcessorConfig::default();
        ProcessorConfig {
            edge_low_threshold: self.edge_low_threshold.unwrap_or(default.edge_low_threshold),
            edge_high_threshold: self
                .edge_high_threshold
                .unwrap_or(default.edge_high_threshold),
            validate_dimensions: self
                .validate_dimensions
                .unwrap_or(default.validate_dimensions),
        }
    }
}
