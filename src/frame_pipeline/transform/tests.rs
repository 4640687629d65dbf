#[cfg(test)]
mod tests {
    use crate::frame_pipeline::frame::types::RgbaFrame;
    use crate::frame_pipeline::transform::edges::EdgeTransform;
    use crate::frame_pipeline::transform::grayscale::GrayscaleTransform;
    use crate::frame_pipeline::transform::pixel_transform::PixelTransform;

    fn solid_frame(width: usize, height: usize, pixel: [u8; 4]) -> Vec<u8> {
        let mut data = Vec::with_capacity(width * height * 4);
        for _ in 0..width * height {
            data.extend_from_slice(&pixel);
        }
        data
    }

    /// Left half dark, right half bright, fully opaque.
    fn step_frame(width: usize, height: usize) -> Vec<u8> {
        let mut data = Vec::with_capacity(width * height * 4);
        for _y in 0..height {
            for x in 0..width {
                let v = if x < width / 2 { 0 } else { 255 };
                data.extend_from_slice(&[v, v, v, 255]);
            }
        }
        data
    }

    fn color_gradient_frame(width: usize, height: usize) -> Vec<u8> {
        let mut data = Vec::with_capacity(width * height * 4);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&[
                    (x * 40 % 256) as u8,
                    (y * 40 % 256) as u8,
                    ((x + y) * 20 % 256) as u8,
                    255,
                ]);
            }
        }
        data
    }

    fn assert_uniform_pixels(output: &[u8]) {
        for (i, px) in output.chunks_exact(4).enumerate() {
            assert!(
                px[1] == px[0] && px[2] == px[0] && px[3] == px[0],
                "pixel {} has non-uniform channels: {:?}",
                i,
                px
            );
        }
    }

    #[test]
    fn test_grayscale_preserves_length() {
        let input = color_gradient_frame(7, 5);
        let frame = RgbaFrame::new(&input, 7, 5).unwrap();
        let output = GrayscaleTransform.apply(&frame).unwrap();
        assert_eq!(output.len(), input.len());
    }

    #[test]
    fn test_grayscale_channels_uniform() {
        let input = color_gradient_frame(8, 8);
        let frame = RgbaFrame::new(&input, 8, 8).unwrap();
        let output = GrayscaleTransform.apply(&frame).unwrap();
        assert_uniform_pixels(&output);
    }

    #[test]
    fn test_grayscale_white_stays_white() {
        let input = solid_frame(2, 2, [255, 255, 255, 255]);
        let frame = RgbaFrame::new(&input, 2, 2).unwrap();
        let output = GrayscaleTransform.apply(&frame).unwrap();
        assert_eq!(output, vec![255u8; 16]);
    }

    #[test]
    fn test_grayscale_black_maps_to_zero() {
        // Opaque black: alpha carries the luminance too, so every byte is 0
        let input = solid_frame(2, 2, [0, 0, 0, 255]);
        let frame = RgbaFrame::new(&input, 2, 2).unwrap();
        let output = GrayscaleTransform.apply(&frame).unwrap();
        assert_eq!(output, vec![0u8; 16]);
    }

    #[test]
    fn test_grayscale_is_idempotent() {
        let input = color_gradient_frame(6, 4);
        let frame = RgbaFrame::new(&input, 6, 4).unwrap();
        let once = GrayscaleTransform.apply(&frame).unwrap();

        let frame_again = RgbaFrame::new(&once, 6, 4).unwrap();
        let twice = GrayscaleTransform.apply(&frame_again).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_edges_preserve_length() {
        let input = step_frame(16, 16);
        let frame = RgbaFrame::new(&input, 16, 16).unwrap();
        let output = EdgeTransform::new().apply(&frame).unwrap();
        assert_eq!(output.len(), input.len());
    }

    #[test]
    fn test_edges_flat_field_is_all_zero() {
        let input = solid_frame(4, 4, [90, 130, 200, 255]);
        let frame = RgbaFrame::new(&input, 4, 4).unwrap();
        let output = EdgeTransform::new().apply(&frame).unwrap();
        assert_eq!(output, vec![0u8; 4 * 4 * 4]);
    }

    #[test]
    fn test_edges_output_is_binary_and_uniform() {
        let input = step_frame(16, 16);
        let frame = RgbaFrame::new(&input, 16, 16).unwrap();
        let output = EdgeTransform::new().apply(&frame).unwrap();

        assert_uniform_pixels(&output);
        for px in output.chunks_exact(4) {
            assert!(px[0] == 0 || px[0] == 255, "unexpected edge value {}", px[0]);
        }
    }

    #[test]
    fn test_edges_detects_step_edge() {
        let input = step_frame(16, 16);
        let frame = RgbaFrame::new(&input, 16, 16).unwrap();
        let output = EdgeTransform::new().apply(&frame).unwrap();

        let edge_pixels = output.chunks_exact(4).filter(|px| px[0] == 255).count();
        assert!(edge_pixels > 0, "step edge should produce edge pixels");
    }

    #[test]
    fn test_edge_thresholds_accessors() {
        let transform = EdgeTransform::with_thresholds(40.0, 90.0);
        assert_eq!(transform.low_threshold(), 40.0);
        assert_eq!(transform.high_threshold(), 90.0);

        let default = EdgeTransform::default();
        assert_eq!(default.low_threshold(), 80.0);
        assert_eq!(default.high_threshold(), 150.0);
    }
}
