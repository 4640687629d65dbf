use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("Buffer length {actual} does not match {width}x{height} RGBA frame ({expected} bytes)")]
    SizeMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid frame dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Failed to convert frame buffer: {0}")]
    PixelConversionError(String),
}

pub type Result<T> = std::result::Result<T, ProcessError>;
