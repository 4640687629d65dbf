use edgeviewer_rs::frame_pipeline::{FrameMode, FrameProcessor, ProcessorConfig};
use edgeviewer_rs::logger;

use tracing::info;

/// Synthesizes an opaque RGBA test pattern with enough intensity variation
/// to exercise both transforms.
fn generate_test_frame(width: usize, height: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            let in_square =
                x > width / 4 && x < 3 * width / 4 && y > height / 4 && y < 3 * height / 4;
            let v = if in_square { 230 } else { 25 };
            data.extend_from_slice(&[v, v, v, 255]);
        }
    }
    data
}

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Starting edge viewer frame pipeline...");

    let config = ProcessorConfig::builder()
        .edge_low_threshold(80.0)
        .edge_high_threshold(150.0)
        .build();
    let processor = FrameProcessor::new(config);

    info!("Frame processor initialized");
    info!(
        "Edge thresholds: low={}, high={}",
        processor.config().edge_low_threshold,
        processor.config().edge_high_threshold
    );

    let (width, height) = (640, 480);
    let frame = generate_test_frame(width, height);

    let gray = processor.process(&frame, width, height, FrameMode::Grayscale)?;
    info!("Grayscale frame: {} bytes", gray.len());

    let edges = processor.process(&frame, width, height, FrameMode::Edges)?;
    let edge_pixels = edges.chunks_exact(4).filter(|px| px[0] != 0).count();
    info!("Edge frame: {} bytes, {} edge pixels", edges.len(), edge_pixels);

    Ok(())
}
