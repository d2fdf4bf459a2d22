use thiserror::Error;

#[derive(Error, Debug)]
pub enum StackCropError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Frame dimension mismatch: expected {expected_width}x{expected_height}, got {width}x{height}")]
    DimensionMismatch {
        expected_width: usize,
        expected_height: usize,
        width: usize,
        height: usize,
    },

    #[error("Empty frame sequence")]
    EmptySequence,

    #[error("Insufficient frame overlap: grid center and fallback anchors are all invalid")]
    NoOverlap,

    #[error("Border validation did not converge after {passes} passes")]
    TooWiggly { passes: u32 },

    #[error("Invalid crop: {0}")]
    InvalidCrop(String),
}

pub type Result<T> = std::result::Result<T, StackCropError>;
