use tracing::{info, instrument};

use crate::frame_pipeline::{
    common::error::{ProcessError, Result},
    frame::types::RgbaFrame,
    processing::types::{FrameMode, ProcessorConfig},
    transform::{EdgeTransform, GrayscaleTransform, PixelTransform},
};

pub struct FrameProcessor<G: PixelTransform, E: PixelTransform> {
    grayscale: G,
    edges: E,
    config: ProcessorConfig,
}

impl FrameProcessor<GrayscaleTransform, EdgeTransform> {
    pub fn new(config: ProcessorConfig) -> Self {
        let edges =
            EdgeTransform::with_thresholds(config.edge_low_threshold, config.edge_high_threshold);
        Self {
            grayscale: GrayscaleTransform,
            edges,
            config,
        }
    }
}

impl<G: PixelTransform, E: PixelTransform> FrameProcessor<G, E> {
    pub fn with_custom(grayscale: G, edges: E, config: ProcessorConfig) -> Self {
        Self {
            grayscale,
            edges,
            config,
        }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(ProcessError::InvalidDimensions(width, height));
        }

        Ok(())
    }

    /// Runs the selected transform over one frame.
    ///
    /// The input is borrowed for the duration of the call; the returned
    /// buffer is freshly allocated and exactly as long as the input.
    #[instrument(skip(self, input), fields(input_size = input.len()))]
    pub fn process(
        &self,
        input: &[u8],
        width: usize,
        height: usize,
        mode: FrameMode,
    ) -> Result<Vec<u8>> {
        info!("Starting frame transform");

        self.validate_dimensions(width, height)?;

        let frame = {
            let _span = tracing::info_span!("validate_frame", width, height).entered();
            RgbaFrame::new(input, width, height)?
        };

        let output = {
            let _span = tracing::info_span!("apply_transform", ?mode).entered();
            match mode {
                FrameMode::Grayscale => self.grayscale.apply(&frame)?,
                FrameMode::Edges => self.edges.apply(&frame)?,
            }
        };

        info!(width, height, "Frame transform complete");
        Ok(output)
    }

    pub fn process_to_gray(&self, input: &[u8], width: usize, height: usize) -> Result<Vec<u8>> {
        self.process(input, width, height, FrameMode::Grayscale)
    }

    pub fn process_to_edges(&self, input: &[u8], width: usize, height: usize) -> Result<Vec<u8>> {
        self.process(input, width, height, FrameMode::Edges)
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }
}
