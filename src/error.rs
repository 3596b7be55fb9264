use thiserror::Error;

#[derive(Error, Debug)]
pub enum CanvasError {
    #[error("Image dimensions {actual_width}x{actual_height} do not match the grid size (expected {expected_width}x{expected_height})")]
    DimensionMismatch {
        expected_width: u32,
        expected_height: u32,
        actual_width: u32,
        actual_height: u32,
    },
    #[error("Image I/O failed: {0}")]
    IoFailure(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, CanvasError>;
