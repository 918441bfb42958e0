use std::io;

use thiserror::Error;

/// An error when encoding a bi-level image
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum FaxError {
    /// The code sink could not accept a code
    #[error("Failed to write code: {0}")]
    Io(#[from] io::Error),

    /// Images need at least one column
    #[error("Image width must not be zero")]
    InvalidWidth,

    /// A row (or reference row) does not match the image width
    #[error("Row has {actual} pixels, expected {expected}")]
    RowLength {
        /// The image width
        expected: usize,
        /// The length of the row
        actual: usize,
    },

    /// The raster does not hold `width * height` pixels
    #[error("Raster of {width}x{height} needs {expected:?} pixels, got {actual}")]
    RasterSize {
        /// The image width
        width: usize,
        /// The image height
        height: usize,
        /// `width * height`, `None` on overflow
        expected: Option<usize>,
        /// The length of the raster
        actual: usize,
    },

    /// The stream ended inside of a row
    #[error("Stream ended after {filled} of {width} pixels in the last row")]
    IncompleteRow {
        /// Pixels written to the unfinished row
        filled: usize,
        /// The image width
        width: usize,
    },

    /// An earlier write to the output failed, the stream is unusable
    #[error("Encoder stopped after an earlier write failed")]
    Poisoned,
}

/// Type alias for convenience
pub type FaxResult<T> = Result<T, FaxError>;
